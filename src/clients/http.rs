use std::time::Duration;
use reqwest::{Client, Response, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use crate::error::Result;
use crate::config::StoreConfig;
use tracing::{error, debug};

pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        for (key, value) in config.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value)
            ) {
                headers.insert(header_name, header_value);
                debug!(
                    header_key = key,
                    "Adding header"
                );
            } else {
                error!(
                    header_key = key,
                    header_value = value,
                    "Invalid header value"
                );
            }
        }

        debug!(
            timeout_secs = ?config.timeout_secs,
            "Creating HTTP client"
        );

        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            headers,
        })
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        debug!(
            url = url,
            headers = self.headers.len(),
            "Creating GET request"
        );

        self.client.get(url).headers(self.headers.clone())
    }

    /// Sends the request without interpreting the status; callers decide what a status means.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            response_headers = ?response.headers().iter()
                .map(|(k, v)| (k.as_str(), v.to_str().unwrap_or("invalid")))
                .collect::<Vec<_>>(),
            "Response received"
        );

        Ok(response)
    }
}
