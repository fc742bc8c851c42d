use thiserror::Error;
use http::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status code: {0}")]
    Status(StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("PDF error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Vendor identifier is empty")]
    EmptyIdentifier,

    #[error("No vendor record is loaded")]
    NotLoaded,

    #[error("Document export already in progress")]
    ExportInProgress,

    #[error("Document export superseded by a newer vendor")]
    ExportSuperseded,
}
