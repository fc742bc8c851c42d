//! Screen rendering of the vendor view as HTML.

use crate::config::RenderConfig;
use crate::models::{DownloadState, FetchState, VendorRecord};
use crate::render::fields::{resolve_rows, Cell, Row, Target};

pub struct HtmlRenderer {
    config: RenderConfig,
    download_href: String,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig, download_href: impl Into<String>) -> Self {
        Self {
            config,
            download_href: download_href.into(),
        }
    }

    pub fn rows(&self, record: &VendorRecord) -> Vec<Row> {
        resolve_rows(record, &self.config, Target::Screen)
    }

    /// Renders the fragment for the current state. Only a loaded record gets a download control.
    pub fn render_state(&self, state: &FetchState, download: DownloadState) -> String {
        match state {
            FetchState::Loaded(record) => self.render_record(record, download),
            FetchState::Loading => status_block("loading", state.message().unwrap_or_default()),
            FetchState::Empty | FetchState::Failed { .. } => {
                status_block("error", state.message().unwrap_or_default())
            }
        }
    }

    pub fn render_record(&self, record: &VendorRecord, download: DownloadState) -> String {
        let mut html = String::from("<div class=\"vendor-detail\" id=\"vendor-detail\">\n");

        if let Some(logo_url) = &self.config.logo_url {
            html.push_str(&format!(
                "  <img src=\"{}\" alt=\"EDCS Logo\" class=\"logo\">\n",
                escape_html(logo_url)
            ));
        }
        html.push_str(&format!(
            "  <h2 class=\"sub-header\">{}</h2>\n  <div class=\"container\">\n",
            escape_html(&self.config.title)
        ));

        for row in self.rows(record) {
            html.push_str(&format!(
                "    <p><strong>{}:</strong> {}</p>\n",
                escape_html(row.label),
                cell_html(&row.cell)
            ));
        }

        html.push_str("  </div>\n");
        html.push_str(&format!(
            "  <a class=\"download\" href=\"{}\" download>{}</a>\n</div>\n",
            escape_html(&self.download_href),
            download.label()
        ));
        html
    }

    /// Wraps [`HtmlRenderer::render_state`] in a standalone page.
    pub fn render_page(&self, state: &FetchState, download: DownloadState) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}</body>
</html>
"#,
            title = escape_html(&self.config.title),
            body = self.render_state(state, download)
        )
    }
}

fn status_block(class: &str, message: &str) -> String {
    format!("<div class=\"{}\">{}</div>\n", class, escape_html(message))
}

fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => escape_html(text),
        Cell::Link { href: Some(href), text } => {
            format!("<a href=\"{}\">{}</a>", escape_html(href), escape_html(text))
        }
        Cell::Link { href: None, text } => escape_html(text),
    }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FETCH_ERROR_MESSAGE, NO_DATA_MESSAGE};

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(RenderConfig::default(), "vendor-details.pdf")
    }

    #[test]
    fn loaded_record_lists_every_field() {
        let record: VendorRecord = [("vendorName", "Acme Co"), ("email", "a@x.com")].into_iter().collect();
        let html = renderer().render_state(&FetchState::Loaded(record), DownloadState::Idle);

        assert!(html.contains("<p><strong>Registered Company Name:</strong> Acme Co</p>"));
        assert!(html.contains("<p><strong>Company Email:</strong> a@x.com</p>"));
        assert!(html.contains("<p><strong>Tax Card:</strong> </p>"));
        assert!(html.contains("<p><strong>Commercial Registration:</strong> N/A</p>"));
        assert_eq!(html.matches("<p>").count(), 14);
        assert!(html.contains(">Download as pdf</a>"));
    }

    #[test]
    fn preparing_download_changes_label() {
        let record: VendorRecord = [("vendorName", "Acme Co")].into_iter().collect();
        let html = renderer().render_state(&FetchState::Loaded(record), DownloadState::Preparing);
        assert!(html.contains(">Preparing document...</a>"));
        assert!(!html.contains("Download as pdf"));
    }

    #[test]
    fn empty_and_failed_have_no_download_control() {
        let empty = renderer().render_state(&FetchState::Empty, DownloadState::Idle);
        assert_eq!(empty, format!("<div class=\"error\">{}</div>\n", NO_DATA_MESSAGE));

        let failed = FetchState::Failed {
            message: FETCH_ERROR_MESSAGE.to_string(),
            cause: "connection refused".to_string(),
        };
        let html = renderer().render_state(&failed, DownloadState::Idle);
        assert!(html.contains(FETCH_ERROR_MESSAGE));
        assert!(!html.contains("connection refused"));
        assert!(!html.contains("download"));
    }

    #[test]
    fn values_and_link_targets_are_escaped() {
        let record: VendorRecord = [
            ("remarks", "<script>alert('x')</script>"),
            ("commercialRegistration", "https://files.example.test/cr?a=1&b=\"2\""),
        ]
        .into_iter()
        .collect();
        let html = renderer().render_record(&record, DownloadState::Idle);

        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains(
            "<a href=\"https://files.example.test/cr?a=1&amp;b=&quot;2&quot;\">View registration</a>"
        ));
    }

    #[test]
    fn header_shows_logo_and_title() {
        let config = RenderConfig {
            logo_url: Some("/static/group-17.png".to_string()),
            ..RenderConfig::default()
        };
        let record: VendorRecord = [("vendorName", "Acme Co")].into_iter().collect();
        let html = HtmlRenderer::new(config, "vendor-details.pdf").render_record(&record, DownloadState::Idle);

        let logo = html.find("<img src=\"/static/group-17.png\" alt=\"EDCS Logo\" class=\"logo\">");
        let title = html.find("<h2 class=\"sub-header\">Supplier Registration</h2>");
        let first_row = html.find("<p>");
        assert!(logo.is_some());
        assert!(logo < title && title < first_row);
    }

    #[test]
    fn header_without_logo_url_keeps_title() {
        let record: VendorRecord = [("vendorName", "Acme Co")].into_iter().collect();
        let html = renderer().render_record(&record, DownloadState::Idle);
        assert!(!html.contains("<img"));
        assert!(html.contains("<h2 class=\"sub-header\">Supplier Registration</h2>"));
    }

    #[test]
    fn page_wraps_loading_state() {
        let page = renderer().render_page(&FetchState::Loading, DownloadState::Idle);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<div class=\"loading\">Loading data...</div>"));
        assert!(page.contains("<title>Supplier Registration</title>"));
    }
}
