//! The single intake endpoint: validate, run the pipeline, respond.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use briefline_core::{BriefInput, FieldIssue};

use crate::api::AppState;
use crate::pipeline;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BriefResponse {
    ok: bool,
    preview_html: String,
    pdf_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    ok: bool,
    error: &'static str,
    detail: Vec<FieldIssue>,
}

/// POST /api/brief
///
/// Only caller-input defects fail the request; every downstream collaborator
/// failure degrades inside the pipeline and still yields a 200.
pub async fn submit_brief(State(state): State<AppState>, body: Bytes) -> Response {
    let brief = match BriefInput::from_body(&body) {
        Ok(brief) => brief,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ValidationResponse {
                    ok: false,
                    error: "Validation error",
                    detail: err.issues,
                }),
            )
                .into_response();
        }
    };

    tracing::info!(
        email = %brief.email,
        goal = %brief.goal,
        product = %brief.product,
        "brief received"
    );

    let result = pipeline::run(&state, &brief).await;

    (
        StatusCode::OK,
        Json(BriefResponse {
            ok: true,
            preview_html: result.preview_html,
            pdf_url: result.pdf_url,
        }),
    )
        .into_response()
}
