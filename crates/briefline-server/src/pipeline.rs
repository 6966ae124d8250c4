//! The staged request pipeline: enrich → render → deliver.
//!
//! Each optional stage is a capability that may be absent (no credential,
//! disabled by config) or may fail at runtime; either way the pipeline
//! degrades to the next fallback instead of failing the request. Stage
//! results are typed so tests can assert which path fired.

use briefline_core::{BriefInput, StrategyDraft};
use briefline_deliver::{pdf_data_url, DeliverClient};
use briefline_enrich::EnrichClient;
use briefline_render::{build_document_html, build_preview_html, PdfRenderer};

use crate::api::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichOutcome {
    /// The completion service produced a valid draft.
    Generated,
    /// No credential configured; placeholder substituted.
    Skipped,
    /// The call failed; placeholder substituted.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// Rasterization disabled by configuration.
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// PDF emailed; not returned inline to avoid duplicate payloads.
    Emailed,
    /// PDF returned to the caller as a data URL.
    Inline,
    /// Nothing to deliver.
    NoPdf,
}

pub struct PipelineResult {
    pub preview_html: String,
    pub pdf_url: Option<String>,
    pub enrich: EnrichOutcome,
    pub render: RenderOutcome,
    pub delivery: DeliveryOutcome,
}

/// Run the full pipeline for a validated brief.
pub async fn run(state: &AppState, brief: &BriefInput) -> PipelineResult {
    let (draft, enrich) = enrich_stage(state.enrich.as_deref(), brief).await;
    let preview_html = build_preview_html(brief, &draft);
    let (pdf, render) = render_stage(state.renderer.as_deref(), brief, &draft).await;
    let (pdf_url, delivery) =
        dispatch_stage(state.deliver.as_deref(), &brief.email, pdf.as_deref()).await;

    tracing::info!(
        enrich = ?enrich,
        render = ?render,
        delivery = ?delivery,
        "brief pipeline finished"
    );

    PipelineResult {
        preview_html,
        pdf_url,
        enrich,
        render,
        delivery,
    }
}

async fn enrich_stage(
    client: Option<&EnrichClient>,
    brief: &BriefInput,
) -> (StrategyDraft, EnrichOutcome) {
    let Some(client) = client else {
        return (StrategyDraft::placeholder(), EnrichOutcome::Skipped);
    };
    match client.draft_strategy(brief).await {
        Ok(draft) => (draft, EnrichOutcome::Generated),
        Err(e) => {
            tracing::warn!(error = %e, "enrichment failed, using placeholder draft");
            (StrategyDraft::placeholder(), EnrichOutcome::Failed)
        }
    }
}

async fn render_stage(
    renderer: Option<&PdfRenderer>,
    brief: &BriefInput,
    draft: &StrategyDraft,
) -> (Option<Vec<u8>>, RenderOutcome) {
    let Some(renderer) = renderer else {
        return (None, RenderOutcome::Skipped);
    };
    let document = build_document_html(brief, draft);
    match renderer.render(&document).await {
        Ok(bytes) => (Some(bytes), RenderOutcome::Rendered),
        Err(e) => {
            tracing::warn!(error = %e, "PDF rasterization failed, responding preview-only");
            (None, RenderOutcome::Failed)
        }
    }
}

async fn dispatch_stage(
    deliver: Option<&DeliverClient>,
    email: &str,
    pdf: Option<&[u8]>,
) -> (Option<String>, DeliveryOutcome) {
    let Some(pdf) = pdf else {
        return (None, DeliveryOutcome::NoPdf);
    };

    if let Some(client) = deliver {
        match client.send_brief_pdf(email, pdf).await {
            Ok(()) => return (None, DeliveryOutcome::Emailed),
            Err(e) => {
                tracing::warn!(error = %e, "email delivery failed, falling back to inline PDF");
            }
        }
    }

    (Some(pdf_data_url(pdf)), DeliveryOutcome::Inline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefline_core::DRAFT_PENDING_SUMMARY;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_brief() -> BriefInput {
        BriefInput::from_value(&json!({
            "goal": "grow signups",
            "product": "SaaS tool",
            "email": "a@b.com"
        }))
        .expect("test brief should validate")
    }

    fn bare_state() -> AppState {
        AppState {
            enrich: None,
            renderer: None,
            deliver: None,
        }
    }

    #[tokio::test]
    async fn bare_pipeline_skips_every_optional_stage() {
        let result = run(&bare_state(), &test_brief()).await;
        assert_eq!(result.enrich, EnrichOutcome::Skipped);
        assert_eq!(result.render, RenderOutcome::Skipped);
        assert_eq!(result.delivery, DeliveryOutcome::NoPdf);
        assert!(result.pdf_url.is_none());
        assert!(result.preview_html.contains("grow signups"));
        assert!(result.preview_html.contains(DRAFT_PENDING_SUMMARY));
    }

    #[tokio::test]
    async fn failed_enrichment_degrades_to_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut state = bare_state();
        state.enrich = Some(Arc::new(
            EnrichClient::with_base_url("key", "gpt-4o-mini", 5, &server.uri()).unwrap(),
        ));

        let result = run(&state, &test_brief()).await;
        assert_eq!(result.enrich, EnrichOutcome::Failed);
        assert!(result.preview_html.contains(DRAFT_PENDING_SUMMARY));
    }

    #[tokio::test]
    async fn successful_enrichment_feeds_the_preview() {
        let server = MockServer::start().await;
        let draft_json = json!({
            "summary": "Search-first plan.",
            "offers": ["trial"],
            "segments": ["founders"],
            "channelPlan": [{ "channel": "search", "role": "capture", "budgetShare": "100%" }]
        });
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": draft_json.to_string() } }
                ]
            })))
            .mount(&server)
            .await;

        let mut state = bare_state();
        state.enrich = Some(Arc::new(
            EnrichClient::with_base_url("key", "gpt-4o-mini", 5, &server.uri()).unwrap(),
        ));

        let result = run(&state, &test_brief()).await;
        assert_eq!(result.enrich, EnrichOutcome::Generated);
        assert!(result.preview_html.contains("Search-first plan."));
        assert!(!result.preview_html.contains(DRAFT_PENDING_SUMMARY));
    }

    #[tokio::test]
    async fn failed_rasterization_yields_preview_only() {
        let mut state = bare_state();
        state.renderer = Some(Arc::new(PdfRenderer::new(
            Some("/nonexistent/chrome".into()),
            2,
        )));

        let result = run(&state, &test_brief()).await;
        assert_eq!(result.render, RenderOutcome::Failed);
        assert_eq!(result.delivery, DeliveryOutcome::NoPdf);
        assert!(result.pdf_url.is_none());
        assert!(result.preview_html.contains("grow signups"));
    }

    #[tokio::test]
    async fn dispatch_without_pdf_delivers_nothing() {
        let (url, outcome) = dispatch_stage(None, "a@b.com", None).await;
        assert!(url.is_none());
        assert_eq!(outcome, DeliveryOutcome::NoPdf);
    }

    #[tokio::test]
    async fn dispatch_without_credential_returns_inline_data_url() {
        let (url, outcome) = dispatch_stage(None, "a@b.com", Some(b"%PDF-1.7")).await;
        assert_eq!(outcome, DeliveryOutcome::Inline);
        let url = url.expect("inline URL");
        assert!(url.starts_with("data:application/pdf;base64,"));
    }

    #[tokio::test]
    async fn dispatch_emails_when_delivery_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email-1" })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            DeliverClient::with_base_url("key", "Briefline <b@t.dev>", 5, &server.uri()).unwrap();
        let (url, outcome) = dispatch_stage(Some(&client), "a@b.com", Some(b"%PDF-1.7")).await;
        assert_eq!(outcome, DeliveryOutcome::Emailed);
        assert!(url.is_none(), "emailed PDFs must not also be returned inline");
    }

    #[tokio::test]
    async fn dispatch_falls_back_to_inline_when_delivery_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client =
            DeliverClient::with_base_url("key", "Briefline <b@t.dev>", 5, &server.uri()).unwrap();
        let (url, outcome) = dispatch_stage(Some(&client), "a@b.com", Some(b"%PDF-1.7")).await;
        assert_eq!(outcome, DeliveryOutcome::Inline);
        assert!(url.expect("inline URL").starts_with("data:application/pdf;base64,"));
    }
}
