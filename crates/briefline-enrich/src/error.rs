use thiserror::Error;

/// Errors returned by the enrichment client.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Network, TLS, timeout, or non-2xx response from the completion API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The brief could not be encoded into the user payload.
    #[error("failed to encode brief: {0}")]
    Encode(#[source] serde_json::Error),

    /// The API responded without a usable completion choice.
    #[error("completion response contained no choices")]
    EmptyCompletion,

    /// The completion content was not the expected JSON object.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The draft parsed but violated a cardinality bound.
    #[error("draft schema violation on field '{0}'")]
    SchemaViolation(&'static str),

    /// The configured base URL was not parseable.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
