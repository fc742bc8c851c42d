//! State of one vendor detail view across identifier changes.
//!
//! Each navigation hands out a [`FetchTicket`]. A fetch result is applied only while its ticket
//! is still the current one, so a slow response for an old identifier never overwrites the
//! outcome for a newer one.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{DownloadState, FetchState, VendorRecord};
use crate::services::VendorService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    identifier: String,
    generation: u64,
}

impl FetchTicket {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Default)]
pub struct VendorView {
    current: Option<FetchTicket>,
    generation: u64,
    state: FetchState,
    download: DownloadState,
}

impl VendorView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `id`, resetting to `Loading`. Blank identifiers are rejected and leave the
    /// view untouched.
    pub fn navigate(&mut self, id: &str) -> Result<FetchTicket> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::EmptyIdentifier);
        }

        self.generation += 1;
        let ticket = FetchTicket {
            identifier: id.to_string(),
            generation: self.generation,
        };
        self.current = Some(ticket.clone());
        self.state = FetchState::Loading;
        self.download = DownloadState::Idle;

        debug!(
            vendor_id = id,
            generation = self.generation,
            "Navigated to vendor"
        );
        Ok(ticket)
    }

    /// Applies a fetch outcome. Returns `false` when the ticket is stale or the view has
    /// already settled for it.
    pub fn apply(&mut self, ticket: &FetchTicket, outcome: FetchState) -> bool {
        if !self.is_current(ticket) {
            warn!(
                vendor_id = ticket.identifier(),
                "Discarding stale fetch result"
            );
            return false;
        }
        if self.state.is_terminal() {
            return false;
        }

        info!(
            vendor_id = ticket.identifier(),
            state = state_name(&outcome),
            "Vendor view settled"
        );
        self.state = outcome;
        true
    }

    pub fn identifier(&self) -> Option<&str> {
        self.current.as_ref().map(FetchTicket::identifier)
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn download_state(&self) -> DownloadState {
        self.download
    }

    /// Whether `ticket` still belongs to the identifier on display.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    /// Moves the download control to `Preparing` and hands out the record to export, tagged
    /// with the ticket of the identifier it belongs to.
    pub fn begin_download(&mut self) -> Result<(FetchTicket, VendorRecord)> {
        if self.download == DownloadState::Preparing {
            return Err(Error::ExportInProgress);
        }
        let record = self.state.record().cloned().ok_or(Error::NotLoaded)?;
        let ticket = self.current.clone().ok_or(Error::NotLoaded)?;
        self.download = DownloadState::Preparing;
        Ok((ticket, record))
    }

    /// Returns the control to `Idle`. A ticket from before the last navigation is ignored so
    /// a late export cannot reset the control of a newer one.
    pub fn finish_download(&mut self, ticket: &FetchTicket) -> bool {
        if !self.is_current(ticket) {
            debug!(
                vendor_id = ticket.identifier(),
                "Ignoring completion of superseded export"
            );
            return false;
        }
        self.download = DownloadState::Idle;
        true
    }
}

fn state_name(state: &FetchState) -> &'static str {
    match state {
        FetchState::Loading => "loading",
        FetchState::Loaded(_) => "loaded",
        FetchState::Empty => "empty",
        FetchState::Failed { .. } => "failed",
    }
}

/// Navigates `view` to `id`, performs the single fetch, and applies it if still current.
///
/// The lock is not held while the request is in flight.
pub async fn load(view: &Mutex<VendorView>, service: &VendorService, id: &str) -> Result<bool> {
    let ticket = view.lock().await.navigate(id)?;
    let outcome = service.fetch(ticket.identifier()).await;
    Ok(view.lock().await.apply(&ticket, outcome))
}
