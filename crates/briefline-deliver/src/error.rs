use thiserror::Error;

/// Errors returned by the email-delivery client.
#[derive(Debug, Error)]
pub enum DeliverError {
    /// Network, TLS, timeout, or non-2xx response from the delivery API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL was not parseable.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
