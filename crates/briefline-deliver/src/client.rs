//! HTTP client for the transactional-email delivery API (Resend-shaped).
//!
//! One endpoint: POST `/emails` with a recipient, a fixed subject/body, and
//! the PDF as a base64 attachment.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::DeliverError;

const DEFAULT_BASE_URL: &str = "https://api.resend.com/";
const SUBJECT: &str = "Your marketing brief (PDF)";
const BODY_HTML: &str =
    "<p>Thanks for your submission — the full brief is attached as a PDF.</p>";

/// Client for the email-delivery API.
///
/// Use [`DeliverClient::new`] for production or
/// [`DeliverClient::with_base_url`] to point at a mock server in tests.
pub struct DeliverClient {
    client: Client,
    api_key: String,
    from: String,
    base_url: Url,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'static str,
    html: &'static str,
    attachments: Vec<Attachment>,
}

#[derive(Serialize)]
struct Attachment {
    filename: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl DeliverClient {
    /// Creates a new client pointed at the production delivery API.
    ///
    /// # Errors
    ///
    /// Returns [`DeliverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, from: &str, timeout_secs: u64) -> Result<Self, DeliverError> {
        Self::with_base_url(api_key, from, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DeliverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DeliverError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        from: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, DeliverError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("briefline/0.1 (brief-intake)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| DeliverError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            from: from.to_owned(),
            base_url,
        })
    }

    /// Emails the brief PDF to the submitter.
    ///
    /// # Errors
    ///
    /// Returns [`DeliverError::Http`] on network failure or a non-2xx status.
    pub async fn send_brief_pdf(&self, to: &str, pdf: &[u8]) -> Result<(), DeliverError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: vec![to],
            subject: SUBJECT,
            html: BODY_HTML,
            attachments: vec![Attachment {
                filename: "brief.pdf",
                content: STANDARD.encode(pdf),
            }],
        };

        let url = self
            .base_url
            .join("emails")
            .map_err(|e| DeliverError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        match response.json::<SendEmailResponse>().await {
            Ok(body) => tracing::debug!(message_id = %body.id, "brief PDF emailed"),
            Err(e) => tracing::debug!(error = %e, "email accepted, response body unparsed"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_serializes_expected_shape() {
        let request = SendEmailRequest {
            from: "Briefline <brief@notifications.briefline.dev>",
            to: vec!["a@b.com"],
            subject: SUBJECT,
            html: BODY_HTML,
            attachments: vec![Attachment {
                filename: "brief.pdf",
                content: STANDARD.encode(b"%PDF"),
            }],
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["to"][0], "a@b.com");
        assert_eq!(json["subject"], SUBJECT);
        assert_eq!(json["attachments"][0]["filename"], "brief.pdf");
        assert_eq!(json["attachments"][0]["content"], "JVBERg==");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let result = DeliverClient::with_base_url("key", "from@x.com", 5, "not a url");
        assert!(matches!(result, Err(DeliverError::InvalidBaseUrl { .. })));
    }
}
