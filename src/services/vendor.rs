use std::sync::Arc;
use tracing::{info, error};
use crate::models::FetchState;
use crate::services::store::RecordStore;

#[derive(Clone)]
pub struct VendorService {
    store: Arc<dyn RecordStore>,
}

impl VendorService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Issues exactly one read for `id` and maps the result to a terminal state.
    pub async fn fetch(&self, id: &str) -> FetchState {
        info!(vendor_id = id, "Fetching vendor record");

        match self.store.fetch_vendor(id).await {
            Ok(Some(record)) => {
                info!(
                    vendor_id = id,
                    fields = record.len(),
                    "Vendor record loaded"
                );
                FetchState::Loaded(record)
            },
            Ok(None) => {
                info!(vendor_id = id, "No vendor data found");
                FetchState::Empty
            },
            Err(e) => {
                error!(
                    error = %e,
                    vendor_id = id,
                    "Failed to fetch vendor record"
                );
                FetchState::failed(&e)
            }
        }
    }
}
