use thiserror::Error;

/// Errors raised while rasterizing a document to PDF.
///
/// None of these abort a request: the caller drops the PDF and responds
/// with the preview alone.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The browser configuration could not be built (bad executable path
    /// or no usable browser binary).
    #[error("browser config error: {0}")]
    Config(String),

    /// A CDP-level failure: launch, navigation, or print-to-PDF.
    #[error("browser error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// The rasterization did not finish within the configured budget.
    #[error("rasterization timed out after {0}s")]
    Timeout(u64),
}
