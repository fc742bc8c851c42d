mod vendor;
mod state;
mod response;

pub use vendor::VendorRecord;
pub use state::{FetchState, DownloadState, LOADING_MESSAGE, NO_DATA_MESSAGE, FETCH_ERROR_MESSAGE};
pub use response::parse_vendor_body;
