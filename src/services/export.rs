use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{info, error, warn};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::render::{HtmlRenderer, PdfRenderer};
use crate::storage::ArtifactWriter;
use crate::view::VendorView;

pub struct ExportService {
    html: HtmlRenderer,
    pdf: PdfRenderer,
    writer: ArtifactWriter,
}

impl ExportService {
    pub fn new(settings: &Settings) -> Self {
        let writer = ArtifactWriter::new(&settings.export);
        Self {
            html: HtmlRenderer::new(settings.render.clone(), writer.file_name("pdf")),
            pdf: PdfRenderer::new(settings.render.clone()),
            writer,
        }
    }

    pub fn html(&self) -> &HtmlRenderer {
        &self.html
    }

    pub fn pdf(&self) -> &PdfRenderer {
        &self.pdf
    }

    /// Runs the download flow: `Idle -> Preparing`, render and write the PDF, back to `Idle`.
    ///
    /// The control returns to `Idle` even when rendering or writing fails. If the view moved to
    /// another identifier while the document was rendering, nothing is written and the newer
    /// view's control is left alone.
    pub async fn export_pdf(&self, view: &Mutex<VendorView>) -> Result<PathBuf> {
        let (ticket, record) = view.lock().await.begin_download()?;
        info!(
            vendor_id = ticket.identifier(),
            fields = record.len(),
            "Preparing document"
        );

        let rendered = self.pdf.render(&record);

        // Held across the write so a navigation cannot slip in between the check and the file.
        let mut view = view.lock().await;
        if !view.is_current(&ticket) {
            warn!(
                vendor_id = ticket.identifier(),
                "Discarding document for superseded vendor"
            );
            return Err(Error::ExportSuperseded);
        }

        let result = match rendered {
            Ok(bytes) => self.writer.write("pdf", &bytes).await,
            Err(e) => Err(e),
        };
        view.finish_download(&ticket);

        if let Err(e) = &result {
            error!(error = %e, "Document export failed");
        }
        result
    }

    /// Writes the current screen rendering as a standalone HTML page.
    pub async fn export_html(&self, view: &Mutex<VendorView>) -> Result<PathBuf> {
        let page = {
            let view = view.lock().await;
            self.html.render_page(view.state(), view.download_state())
        };
        self.writer.write("html", page.as_bytes()).await
    }
}
