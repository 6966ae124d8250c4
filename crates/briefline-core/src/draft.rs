//! AI-generated marketing-strategy draft.
//!
//! Every sequence field defaults to empty so rendering only ever branches
//! on emptiness, never on field presence.

use serde::{Deserialize, Serialize};

/// Summary text used when enrichment is skipped or fails.
pub const DRAFT_PENDING_SUMMARY: &str =
    "Strategy draft pending — a strategist will review your brief.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPlanEntry {
    pub channel: String,
    pub role: String,
    pub budget_share: String,
}

/// Structured strategy content derived from a brief by the enrichment
/// service, or the empty placeholder when that stage did not run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyDraft {
    pub summary: String,
    pub offers: Vec<String>,
    pub headlines: Vec<String>,
    pub segments: Vec<String>,
    pub channel_plan: Vec<ChannelPlanEntry>,
    pub creatives: Vec<String>,
    pub kpi_baseline: Vec<String>,
    pub risks: Vec<String>,
    pub next_steps: Vec<String>,
}

impl StrategyDraft {
    /// The well-defined empty draft substituted when enrichment is skipped
    /// or fails.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            summary: DRAFT_PENDING_SUMMARY.to_string(),
            ..Self::default()
        }
    }

    /// Check the cardinality bounds the enrichment service must respect.
    ///
    /// Returns the name of the first out-of-bounds field, or `None` when the
    /// draft is acceptable. Bounds per sequence: offers 1–8, headlines 0–10,
    /// segments 1–8, channelPlan 1–10, creatives 0–10, kpiBaseline 0–10,
    /// risks 0–10, nextSteps 0–10.
    #[must_use]
    pub fn bounds_violation(&self) -> Option<&'static str> {
        fn out_of(len: usize, min: usize, max: usize) -> bool {
            len < min || len > max
        }

        if self.summary.trim().is_empty() {
            return Some("summary");
        }
        if out_of(self.offers.len(), 1, 8) {
            return Some("offers");
        }
        if out_of(self.headlines.len(), 0, 10) {
            return Some("headlines");
        }
        if out_of(self.segments.len(), 1, 8) {
            return Some("segments");
        }
        if out_of(self.channel_plan.len(), 1, 10) {
            return Some("channelPlan");
        }
        if out_of(self.creatives.len(), 0, 10) {
            return Some("creatives");
        }
        if out_of(self.kpi_baseline.len(), 0, 10) {
            return Some("kpiBaseline");
        }
        if out_of(self.risks.len(), 0, 10) {
            return Some("risks");
        }
        if out_of(self.next_steps.len(), 0, 10) {
            return Some("nextSteps");
        }
        None
    }
}
