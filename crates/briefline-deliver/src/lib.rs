//! PDF delivery: transactional email with the PDF attached, or the inline
//! data-URL representation handed back to the caller.

mod client;
mod error;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub use client::DeliverClient;
pub use error::DeliverError;

/// Encode PDF bytes as a self-contained `data:` URL for inline delivery.
#[must_use]
pub fn pdf_data_url(pdf: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", STANDARD.encode(pdf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_data_url_has_mime_prefix_and_base64_payload() {
        let url = pdf_data_url(b"%PDF-1.7 fake");
        assert!(url.starts_with("data:application/pdf;base64,"));
        let payload = url.trim_start_matches("data:application/pdf;base64,");
        assert_eq!(STANDARD.decode(payload).unwrap(), b"%PDF-1.7 fake");
    }

    #[test]
    fn pdf_data_url_of_empty_bytes_is_just_the_prefix() {
        assert_eq!(pdf_data_url(b""), "data:application/pdf;base64,");
    }
}
