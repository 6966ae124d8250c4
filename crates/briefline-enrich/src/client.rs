//! HTTP client for the chat-completion API.
//!
//! Wraps `reqwest` with typed error handling and draft schema validation.
//! The request is constrained to JSON-object output via `response_format`;
//! the first choice's message content is parsed into a `StrategyDraft` and
//! bounds-checked before it is handed back.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use briefline_core::{BriefInput, StrategyDraft};

use crate::error::EnrichError;
use crate::prompt::{user_payload, SYSTEM_PROMPT};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

/// Client for the chat-completion enrichment service.
///
/// Use [`EnrichClient::new`] for production or
/// [`EnrichClient::with_base_url`] to point at a mock server in tests.
pub struct EnrichClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl EnrichClient {
    /// Creates a new client pointed at the production completion API.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, EnrichError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EnrichError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, EnrichError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("briefline/0.1 (brief-intake)")
            .build()?;

        // Normalise: a trailing slash makes Url::join append rather than
        // replace the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| EnrichError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Requests a strategy draft for the given brief.
    ///
    /// # Errors
    ///
    /// - [`EnrichError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`EnrichError::EmptyCompletion`] if no completion choice came back.
    /// - [`EnrichError::Deserialize`] if the completion content is not the
    ///   expected JSON object.
    /// - [`EnrichError::SchemaViolation`] if a sequence field is out of bounds.
    pub async fn draft_strategy(&self, brief: &BriefInput) -> Result<StrategyDraft, EnrichError> {
        let payload = user_payload(brief)?;
        let request = ChatRequest {
            model: &self.model,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &payload,
                },
            ],
        };

        let url = self
            .base_url
            .join("chat/completions")
            .map_err(|e| EnrichError::InvalidBaseUrl {
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

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(EnrichError::EmptyCompletion)?;

        let draft: StrategyDraft =
            serde_json::from_str(&content).map_err(|e| EnrichError::Deserialize {
                context: "completion content".to_string(),
                source: e,
            })?;

        if let Some(field) = draft.bounds_violation() {
            return Err(EnrichError::SchemaViolation(field));
        }

        tracing::debug!(
            offers = draft.offers.len(),
            segments = draft.segments.len(),
            channel_plan = draft.channel_plan.len(),
            "strategy draft generated"
        );
        Ok(draft)
    }
}
