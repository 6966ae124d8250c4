mod brief;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use briefline_core::AppConfig;
use briefline_deliver::DeliverClient;
use briefline_enrich::EnrichClient;
use briefline_render::PdfRenderer;

const DELIVER_TIMEOUT_SECS: u64 = 30;

/// Shared, immutable per-process state. Each optional capability is `None`
/// when its credential is missing or it is disabled by config; the pipeline
/// degrades accordingly.
#[derive(Clone)]
pub struct AppState {
    pub enrich: Option<Arc<EnrichClient>>,
    pub renderer: Option<Arc<PdfRenderer>>,
    pub deliver: Option<Arc<DeliverClient>>,
}

impl AppState {
    /// Build the capability set from configuration, logging what is off.
    ///
    /// # Errors
    ///
    /// Fails only if a configured HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let enrich = match &config.openai_api_key {
            Some(key) => Some(Arc::new(EnrichClient::new(
                key,
                &config.openai_model,
                config.enrich_timeout_secs,
            )?)),
            None => {
                tracing::warn!("OPENAI_API_KEY not set; draft enrichment disabled");
                None
            }
        };

        let renderer = if config.pdf_enabled {
            Some(Arc::new(PdfRenderer::new(
                config.chrome_path.clone(),
                config.render_timeout_secs,
            )))
        } else {
            tracing::warn!("BRIEFLINE_PDF_ENABLED=false; PDF rasterization disabled");
            None
        };

        let deliver = match &config.resend_api_key {
            Some(key) => Some(Arc::new(DeliverClient::new(
                key,
                &config.mail_from,
                DELIVER_TIMEOUT_SECS,
            )?)),
            None => {
                tracing::warn!("RESEND_API_KEY not set; email delivery disabled");
                None
            }
        };

        Ok(Self {
            enrich,
            renderer,
            deliver,
        })
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors(allowed_origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origin == "*" {
        return cors.allow_origin(Any);
    }
    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!(error = %e, origin = allowed_origin, "invalid allowed origin, falling back to any");
            cors.allow_origin(Any)
        }
    }
}

pub fn build_app(state: AppState, allowed_origin: &str) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/brief",
            post(brief::submit_brief).fallback(method_not_allowed),
        )
        .layer(ServiceBuilder::new().layer(build_cors(allowed_origin)))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

/// Preflight OPTIONS is answered by the CORS layer before routing; anything
/// else that is not a POST lands here.
async fn method_not_allowed() -> impl IntoResponse {
    (axum::http::StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
