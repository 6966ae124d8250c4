//! Prompt construction for the strategy-draft completion.
//!
//! Keeping the prompt in one place makes regressions easy to catch: unit
//! tests can inspect it without calling a real completion API.

use briefline_core::BriefInput;

use crate::error::EnrichError;

/// System instruction sent with every enrichment request.
///
/// The completion is constrained to a single JSON object matching the
/// `StrategyDraft` wire shape; anything else fails deserialization and the
/// caller falls back to the placeholder draft.
pub const SYSTEM_PROMPT: &str = r#"You are a senior marketing strategist. You receive a client intake brief as a JSON object and must produce a first-pass strategy draft.

Respond with a SINGLE JSON object and nothing else, with exactly these keys:

{
  "summary": string,              // 2-4 sentence strategy summary
  "offers": string[],             // 1-8 concrete offer ideas
  "headlines": string[],          // up to 10 ad headline ideas
  "segments": string[],           // 1-8 audience segments
  "channelPlan": [                // 1-10 entries
    { "channel": string, "role": string, "budgetShare": string }
  ],
  "creatives": string[],          // up to 10 creative directions
  "kpiBaseline": string[],        // up to 10 KPI baselines to establish
  "risks": string[],              // up to 10 risks
  "nextSteps": string[]           // up to 10 next steps
}

Rules:
- Ground every suggestion in the brief's goal, product, audience, and constraints.
- Respect the stated budget and excluded channels.
- Write in the same language as the brief.
- Do NOT wrap the object in markdown fences or add commentary."#;

/// Encode the validated brief as the user message payload.
///
/// # Errors
///
/// Returns [`EnrichError::Encode`] if the brief cannot be serialized, which
/// should not happen for a validated `BriefInput`.
pub fn user_payload(brief: &BriefInput) -> Result<String, EnrichError> {
    serde_json::to_string(brief).map_err(EnrichError::Encode)
}
