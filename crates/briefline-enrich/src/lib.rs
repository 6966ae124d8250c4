//! Chat-completion client that turns a validated brief into a
//! [`briefline_core::StrategyDraft`].
//!
//! Failures here are never fatal to a request: the caller substitutes the
//! placeholder draft and carries on.

mod client;
mod error;
mod prompt;

pub use client::EnrichClient;
pub use error::EnrichError;
pub use prompt::SYSTEM_PROMPT;
