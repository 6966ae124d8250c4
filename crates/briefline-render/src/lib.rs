//! Document rendering: HTML preview/document templating and best-effort
//! PDF rasterization through a headless browser.

mod error;
mod pdf;
mod preview;

pub use error::RenderError;
pub use pdf::PdfRenderer;
pub use preview::{build_document_html, build_preview_html, escape_attr, escape_html};
