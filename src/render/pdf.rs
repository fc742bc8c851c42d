//! Document rendering of a vendor record as an A4 PDF.

use std::path::PathBuf;

use chrono::Utc;
use genpdf::elements::{Break, Paragraph, TableLayout};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Element as _, PaperSize, SimplePageDecorator};
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::models::VendorRecord;
use crate::render::elements::{logo_from_path, LinkText};
use crate::render::fields::{resolve_rows, Cell, Row, Target};
use crate::render::fonts;

const LOGO_WIDTH_MM: f64 = 28.0;
const PAGE_MARGIN_MM: i32 = 10;
const CELL_PADDING_MM: i32 = 2;
const BASE_FONT_SIZE: u8 = 11;

const ACCENT: Color = Color::Rgb(30, 93, 135);
const HEADING: Color = Color::Rgb(51, 51, 51);
const CONTENT: Color = Color::Rgb(85, 85, 85);

/// Everything the document shows, independent of the PDF backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub title: String,
    pub logo_path: Option<PathBuf>,
    pub rows: Vec<Row>,
    pub generated_at: String,
}

pub struct PdfRenderer {
    config: RenderConfig,
}

impl PdfRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self, record: &VendorRecord) -> DocumentLayout {
        DocumentLayout {
            title: self.config.title.clone(),
            logo_path: self.config.logo_path.clone(),
            rows: resolve_rows(record, &self.config, Target::Document),
            generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }

    pub fn fonts_available(&self) -> bool {
        fonts::fonts_available(&self.config)
    }

    /// Renders the record into PDF bytes.
    pub fn render(&self, record: &VendorRecord) -> Result<Vec<u8>> {
        let layout = self.layout(record);
        let family = fonts::load_font_family(&self.config)?;

        let mut document = genpdf::Document::new(family);
        document.set_title(layout.title.clone());
        document.set_paper_size(PaperSize::A4);
        document.set_font_size(BASE_FONT_SIZE);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(PAGE_MARGIN_MM);
        document.set_page_decorator(decorator);

        if let Some(path) = &layout.logo_path {
            match logo_from_path(path, LOGO_WIDTH_MM) {
                Ok(logo) => {
                    document.push(logo);
                    document.push(Break::new(1));
                }
                Err(e) => warn!(
                    error = %e,
                    path = %path.display(),
                    "Skipping logo in document header"
                ),
            }
        }

        document.push(
            Paragraph::new(StyledString::new(
                layout.title.clone(),
                Style::new().bold().with_font_size(18).with_color(HEADING),
            ))
            .aligned(Alignment::Center),
        );
        document.push(Break::new(1));

        let mut table = TableLayout::new(vec![2, 3]);
        for row in &layout.rows {
            let label = Paragraph::new(StyledString::new(
                format!("{}:", row.label),
                Style::new().bold().with_color(ACCENT),
            ))
            .padded(CELL_PADDING_MM);

            let table_row = table.row().element(label);
            let table_row = match &row.cell {
                Cell::Link { href: Some(_), text } => table_row.element(
                    LinkText::new(StyledString::new(text.clone(), Style::new().with_color(ACCENT)))
                        .padded(CELL_PADDING_MM),
                ),
                cell => table_row.element(
                    Paragraph::new(StyledString::new(
                        cell.text().to_string(),
                        Style::new().with_font_size(12).with_color(CONTENT),
                    ))
                    .padded(CELL_PADDING_MM),
                ),
            };
            table_row.push()?;
        }
        document.push(table);

        document.push(Break::new(1));
        document.push(
            Paragraph::new(StyledString::new(
                format!("Generated {}", layout.generated_at),
                Style::new().with_font_size(8).with_color(CONTENT),
            ))
            .aligned(Alignment::Right),
        );

        let mut bytes = Vec::new();
        document.render(&mut bytes)?;

        debug!(
            rows = layout.rows.len(),
            bytes = bytes.len(),
            "Rendered vendor document"
        );

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fills_missing_values_with_placeholder() {
        let record: VendorRecord = [("vendorName", "Acme Co"), ("email", "a@x.com")].into_iter().collect();
        let layout = PdfRenderer::new(RenderConfig::default()).layout(&record);

        assert_eq!(layout.title, "Supplier Registration");
        assert_eq!(layout.rows.len(), 14);
        assert_eq!(layout.rows[0].line(), "Registered Company Name: Acme Co");
        assert_eq!(layout.rows[2].line(), "Company Email: a@x.com");
        assert_eq!(layout.rows[13].line(), "Remarks: N/A");
    }
}
