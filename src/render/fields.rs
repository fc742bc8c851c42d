//! The vendor field table and its resolution into rendered rows.
//!
//! Both the screen and the document renderer go through [`resolve_rows`]; neither keeps its own
//! list of labels or keys.

use crate::config::RenderConfig;
use crate::models::VendorRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// The value is a link target shown behind a fixed label.
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: FieldKind,
}

const fn text(label: &'static str, key: &'static str) -> FieldSpec {
    FieldSpec { label, key, kind: FieldKind::Text }
}

pub const VENDOR_FIELDS: &[FieldSpec] = &[
    text("Registered Company Name", "vendorName"),
    FieldSpec {
        label: "Commercial Registration",
        key: "commercialRegistration",
        kind: FieldKind::Link,
    },
    text("Company Email", "email"),
    text("Contact Person", "contactPerson"),
    text("Email", "emailContact"),
    text("Contact Mobile No", "contactMobile"),
    text("Scope of Work", "scopeOfWork"),
    text("Project Proposed", "proposedProject"),
    text("Tax Card", "taxCard"),
    text("Federation Registration", "federation"),
    text("Classification", "classification"),
    text("Bank Account", "bankAccount"),
    text("Swift Code", "swiftCode"),
    text("Remarks", "remarks"),
];

/// Text shown for a link field whose target is missing, on every target.
pub const LINK_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Screen,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link { href: Option<String>, text: String },
}

impl Cell {
    /// Visible text of the cell.
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: &'static str,
    pub cell: Cell,
}

impl Row {
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.cell.text())
    }
}

fn placeholder(config: &RenderConfig, target: Target) -> &str {
    match target {
        Target::Screen => &config.screen_placeholder,
        Target::Document => &config.document_placeholder,
    }
}

pub fn resolve_cell(spec: &FieldSpec, record: &VendorRecord, config: &RenderConfig, target: Target) -> Cell {
    let value = record.get(spec.key);
    match spec.kind {
        FieldKind::Text => Cell::Text(
            value
                .unwrap_or_else(|| placeholder(config, target))
                .to_string(),
        ),
        FieldKind::Link => match value {
            Some(href) => Cell::Link {
                href: Some(href.to_string()),
                text: config.link_label.clone(),
            },
            None => Cell::Link {
                href: None,
                text: LINK_PLACEHOLDER.to_string(),
            },
        },
    }
}

/// One row per entry of [`VENDOR_FIELDS`], in table order.
pub fn resolve_rows(record: &VendorRecord, config: &RenderConfig, target: Target) -> Vec<Row> {
    VENDOR_FIELDS
        .iter()
        .map(|spec| Row {
            label: spec.label,
            cell: resolve_cell(spec, record, config, target),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> VendorRecord {
        [("vendorName", "Acme Co"), ("email", "a@x.com")].into_iter().collect()
    }

    #[test]
    fn table_keys_are_unique() {
        let mut keys: Vec<_> = VENDOR_FIELDS.iter().map(|spec| spec.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), VENDOR_FIELDS.len());
        assert_eq!(VENDOR_FIELDS.len(), 14);
    }

    #[test]
    fn screen_rows_leave_missing_fields_blank() {
        let rows = resolve_rows(&acme(), &RenderConfig::default(), Target::Screen);
        assert_eq!(rows[0].line(), "Registered Company Name: Acme Co");
        assert_eq!(rows[2].line(), "Company Email: a@x.com");
        assert_eq!(rows[3].cell, Cell::Text(String::new()));
    }

    #[test]
    fn document_rows_use_placeholder() {
        let rows = resolve_rows(&acme(), &RenderConfig::default(), Target::Document);
        assert_eq!(rows[0].cell.text(), "Acme Co");
        assert!(rows[3..].iter().all(|row| row.cell.text() == "N/A"));
    }

    #[test]
    fn link_shows_label_and_keeps_target() {
        let record: VendorRecord = [("commercialRegistration", "https://files.example.test/cr.pdf")]
            .into_iter()
            .collect();
        let config = RenderConfig::default();
        for target in [Target::Screen, Target::Document] {
            let rows = resolve_rows(&record, &config, target);
            assert_eq!(
                rows[1].cell,
                Cell::Link {
                    href: Some("https://files.example.test/cr.pdf".to_string()),
                    text: "View registration".to_string(),
                }
            );
        }
    }

    #[test]
    fn missing_link_is_placeholder_on_both_targets() {
        let config = RenderConfig::default();
        for target in [Target::Screen, Target::Document] {
            let rows = resolve_rows(&acme(), &config, target);
            assert_eq!(rows[1].cell, Cell::Link { href: None, text: "N/A".to_string() });
        }
    }

    #[test]
    fn unified_placeholder_makes_targets_identical() {
        let config = RenderConfig {
            screen_placeholder: "N/A".to_string(),
            ..RenderConfig::default()
        };
        assert_eq!(
            resolve_rows(&acme(), &config, Target::Screen),
            resolve_rows(&acme(), &config, Target::Document)
        );
    }
}
