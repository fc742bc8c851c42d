pub mod export;
pub mod store;
pub mod vendor;

pub use export::ExportService;
pub use store::{FirebaseStore, RecordStore};
pub use vendor::VendorService;
