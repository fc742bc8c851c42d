use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use vendor_detail::config::Settings;
use vendor_detail::models::FETCH_ERROR_MESSAGE;
use vendor_detail::render::HtmlRenderer;
use vendor_detail::{load, ExportService, FetchState, FirebaseStore, VendorService, VendorView};

/// Fetches one vendor record and renders it as an HTML view and a PDF document.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Vendor identifier to look up.
    id: String,

    /// Write the HTML view to `<output-dir>/vendor-details.html`. A loaded record also gets
    /// its PDF exported so the page's download link resolves.
    #[arg(long)]
    html: bool,

    /// Export the PDF document to `<output-dir>/vendor-details.pdf`.
    #[arg(long)]
    pdf: bool,

    /// Overrides `export.output_dir`.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Configuration file to read instead of `config/default`.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir.clone() {
        settings.export.output_dir = dir;
    }

    let store = FirebaseStore::new(&settings.store)?;
    let service = VendorService::new(Arc::new(store));
    let exporter = ExportService::new(&settings);
    let view = Mutex::new(VendorView::new());

    load(&view, &service, &cli.id).await?;

    let state = view.lock().await.state().clone();
    for line in summary_lines(&state, exporter.html()) {
        println!("{}", line);
    }

    if wants_document(&cli, &state) {
        let path = exporter.export_pdf(&view).await?;
        println!("Document: {}", path.display());
    }

    if cli.html {
        let path = exporter.export_html(&view).await?;
        println!("HTML view: {}", path.display());
    }

    if let Some(err) = exit_error(&state) {
        return Err(err);
    }

    Ok(())
}

/// Lines printed for the settled view: the resolved rows, or the user-facing message.
fn summary_lines(state: &FetchState, html: &HtmlRenderer) -> Vec<String> {
    match state {
        FetchState::Loaded(record) => html.rows(record).iter().map(|row| row.line()).collect(),
        other => vec![other.message().unwrap_or_default().to_string()],
    }
}

/// The HTML page links to the PDF, so writing the page also exports the document.
fn wants_document(cli: &Cli, state: &FetchState) -> bool {
    (cli.pdf || cli.html) && state.record().is_some()
}

/// Non-zero exit for a failed fetch. The cause was already logged and stays out of the message.
fn exit_error(state: &FetchState) -> Option<anyhow::Error> {
    match state {
        FetchState::Failed { .. } => Some(anyhow::anyhow!(FETCH_ERROR_MESSAGE)),
        _ => None,
    }
}
