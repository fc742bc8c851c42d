pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;
pub mod view;

pub use error::{Error, Result};
pub use models::{DownloadState, FetchState, VendorRecord};
pub use services::{ExportService, FirebaseStore, RecordStore, VendorService};
pub use view::{load, FetchTicket, VendorView};
