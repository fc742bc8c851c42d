use async_trait::async_trait;
use http::StatusCode;
use tracing::{debug, error};
use crate::clients::HttpClient;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::{parse_vendor_body, VendorRecord};

/// Read-only source of vendor records.
///
/// `Ok(None)` means the store answered but holds no data for the identifier. Every `Err` is a
/// transport-level failure.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_vendor(&self, id: &str) -> Result<Option<VendorRecord>>;
}

/// Store path of a vendor's info document.
pub fn vendor_info_path(id: &str) -> String {
    format!("vendors/{}/vendorInfo", id)
}

/// Firebase Realtime Database over its REST interface.
pub struct FirebaseStore {
    client: HttpClient,
    base_url: String,
}

impl FirebaseStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn vendor_url(&self, id: &str) -> String {
        format!("{}/{}.json", self.base_url, vendor_info_path(id))
    }
}

#[async_trait]
impl RecordStore for FirebaseStore {
    async fn fetch_vendor(&self, id: &str) -> Result<Option<VendorRecord>> {
        let url = self.vendor_url(id);
        let request = self.client.get(&url);
        let response = self.client.send(request).await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.bytes().await?;
                parse_vendor_body(&body).map_err(|e| {
                    let body_str = String::from_utf8_lossy(&body);
                    error!(
                        error = %e,
                        body = %body_str,
                        vendor_id = id,
                        "Failed to parse vendor info response"
                    );
                    e
                })
            },
            StatusCode::NOT_FOUND => {
                debug!(
                    vendor_id = id,
                    "Received 404 for vendor info, treating as empty"
                );
                Ok(None)
            },
            status => {
                error!(
                    status = status.as_u16(),
                    vendor_id = id,
                    "Unexpected status code"
                );
                Err(Error::Status(status))
            }
        }
    }
}
