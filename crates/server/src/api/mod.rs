//! HTTP endpoint modules.
//!
//! Each sub-module owns one area of the API. Shared error types live here.

mod chatbot;
pub mod doc;
mod health;
mod signals;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

/// Every failure on this API surfaces as a 500 with an `{error}` body.
pub(crate) fn internal_error(message: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────
// Flat `api::foo` paths used by router.rs.

pub use chatbot::{mazwi, mazwi_proactive};
pub use health::health;
pub use signals::{alerts, news, reminders, snapshot};
