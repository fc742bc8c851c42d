use crate::error::Error;
use crate::models::VendorRecord;

pub const LOADING_MESSAGE: &str = "Loading data...";
pub const NO_DATA_MESSAGE: &str = "No vendor data found.";
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching data.";

const DOWNLOAD_LABEL: &str = "Download as pdf";
const PREPARING_LABEL: &str = "Preparing document...";

/// Outcome of looking up one vendor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(VendorRecord),
    Empty,
    Failed {
        message: String,
        /// Underlying error text, kept for diagnostics and never rendered.
        cause: String,
    },
}

impl FetchState {
    pub fn failed(cause: &Error) -> Self {
        FetchState::Failed {
            message: FETCH_ERROR_MESSAGE.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }

    pub fn record(&self) -> Option<&VendorRecord> {
        match self {
            FetchState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// User-facing text for every state except `Loaded`.
    pub fn message(&self) -> Option<&str> {
        match self {
            FetchState::Loading => Some(LOADING_MESSAGE),
            FetchState::Loaded(_) => None,
            FetchState::Empty => Some(NO_DATA_MESSAGE),
            FetchState::Failed { message, .. } => Some(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadState {
    #[default]
    Idle,
    Preparing,
}

impl DownloadState {
    pub fn label(self) -> &'static str {
        match self {
            DownloadState::Idle => DOWNLOAD_LABEL,
            DownloadState::Preparing => PREPARING_LABEL,
        }
    }
}
