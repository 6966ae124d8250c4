//! Headless-browser PDF rasterization via the Chrome DevTools Protocol.
//!
//! Each call launches a browser, prints the document, and tears the browser
//! down again — every exit path, including timeout, closes the process so
//! nothing leaks across requests.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::time::timeout;

use crate::error::RenderError;

/// A4 in inches, 0.4in margins, backgrounds printed.
fn a4_params() -> PrintToPdfParams {
    PrintToPdfParams {
        print_background: Some(true),
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        margin_top: Some(0.4),
        margin_bottom: Some(0.4),
        margin_left: Some(0.4),
        margin_right: Some(0.4),
        ..PrintToPdfParams::default()
    }
}

/// Best-effort HTML-to-PDF rasterizer.
pub struct PdfRenderer {
    chrome_path: Option<PathBuf>,
    timeout: Duration,
}

impl PdfRenderer {
    #[must_use]
    pub fn new(chrome_path: Option<PathBuf>, timeout_secs: u64) -> Self {
        Self {
            chrome_path,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Rasterize an HTML document into PDF bytes.
    ///
    /// # Errors
    ///
    /// - [`RenderError::Config`] if no usable browser binary is found.
    /// - [`RenderError::Cdp`] on launch, navigation, or print failure.
    /// - [`RenderError::Timeout`] if rendering exceeds the configured budget.
    pub async fn render(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let mut builder = BrowserConfig::builder();
        if let Some(path) = &self.chrome_path {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(RenderError::Config)?;

        let (mut browser, mut handler) = Browser::launch(config).await?;
        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let result = timeout(self.timeout, print_document(&browser, html)).await;

        // Teardown happens before the result is inspected so a failed or
        // timed-out render cannot leak the browser process.
        if let Err(e) = browser.close().await {
            tracing::warn!(error = %e, "browser close failed");
        }
        browser.wait().await.ok();
        handler_task.abort();

        match result {
            Ok(inner) => inner,
            Err(_) => Err(RenderError::Timeout(self.timeout.as_secs())),
        }
    }
}

async fn print_document(browser: &Browser, html: &str) -> Result<Vec<u8>, RenderError> {
    let page = browser.new_page("about:blank").await?;
    page.set_content(html).await?;
    // Let in-document resources settle before capturing.
    page.wait_for_navigation().await?;
    let bytes = page.pdf(a4_params()).await?;
    Ok(bytes)
}
