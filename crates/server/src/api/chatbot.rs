//! Mazwi chat endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use prosuite_mazwi::{ChatMessage, ContentBlock, LocationHint};
use prosuite_signals::{proactive_digest, ProactiveDigest};

use super::{internal_error, ApiError, ErrorResponse};
use crate::state::AppState;

// ── DTOs ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct MazwiRequest {
    pub message: String,
    /// Prior turns. Accepted but never used for routing.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub location: Option<LocationHint>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MazwiResponse {
    pub response: String,
    #[serde(rename = "richContent", skip_serializing_if = "Vec::is_empty")]
    #[schema(value_type = Vec<Object>)]
    pub rich_content: Vec<ContentBlock>,
}

// ── Handlers ──────────────────────────────────────────────────────

/// Ask Mazwi a question about the current metrics.
///
/// The body is parsed here rather than by the `Json` extractor so that a
/// malformed payload gets the same 500 `{error}` shape as any other failure.
#[utoipa::path(
    post,
    path = "/api/chatbot/mazwi",
    tag = "Mazwi",
    request_body = MazwiRequest,
    responses(
        (status = 200, description = "Assistant reply", body = MazwiResponse),
        (status = 500, description = "Malformed request or reply failed", body = ErrorResponse)
    )
)]
pub async fn mazwi(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MazwiResponse>, ApiError> {
    let req: MazwiRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "mazwi: invalid request body");
        internal_error(format!("Invalid request body: {e}"))
    })?;

    let snapshot = state.snapshot();
    let reply = state
        .mazwi
        .route(&req.message, &req.history, req.location.as_ref(), &snapshot)
        .await
        .map_err(|e| {
            error!(error = %e, "mazwi: failed to build reply");
            internal_error(e.to_string())
        })?;

    Ok(Json(MazwiResponse {
        response: reply.text,
        rich_content: reply.rich_content,
    }))
}

/// Alerts and reminders for the widget's periodic notification check.
#[utoipa::path(
    post,
    path = "/api/chatbot/mazwi/proactive",
    tag = "Mazwi",
    responses(
        (status = 200, description = "Current alerts and reminders", body = Object)
    )
)]
pub async fn mazwi_proactive(State(state): State<Arc<AppState>>) -> Json<ProactiveDigest> {
    let digest = proactive_digest(&state.snapshot());
    info!(
        alerts = digest.alerts.len(),
        reminders = digest.reminders.len(),
        actionable = digest.actionable().count(),
        "mazwi: proactive digest"
    );
    Json(digest)
}
