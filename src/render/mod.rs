pub mod elements;
pub mod fields;
pub mod fonts;
pub mod html;
pub mod pdf;

pub use fields::{resolve_rows, Cell, FieldKind, FieldSpec, Row, Target, VENDOR_FIELDS};
pub use html::HtmlRenderer;
pub use pdf::{DocumentLayout, PdfRenderer};
