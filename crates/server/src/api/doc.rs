//! OpenAPI documentation aggregator.
//!
//! Collects the `#[utoipa::path]` handlers and `ToSchema` types into one
//! OpenAPI 3.1 document, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ProSuite Mazwi API",
        version = "0.1.0",
        description = "Rule-based GRC assistant: metric snapshots, proactive alerts and reminders, and keyword-routed chat replies.",
    ),
    tags(
        (name = "Health", description = "Server liveness"),
        (name = "Mazwi", description = "Chat replies and proactive notification digests"),
        (name = "Signals", description = "Metric snapshot, alerts, reminders and news"),
    ),
    paths(
        // Health
        crate::api::health::health,
        // Mazwi
        crate::api::chatbot::mazwi,
        crate::api::chatbot::mazwi_proactive,
        // Signals
        crate::api::signals::snapshot,
        crate::api::signals::alerts,
        crate::api::signals::reminders,
        crate::api::signals::news,
    ),
    components(schemas(
        crate::api::ErrorResponse,
        crate::api::health::HealthResponse,
        crate::api::chatbot::MazwiRequest,
        crate::api::chatbot::MazwiResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/health",
            "/api/chatbot/mazwi",
            "/api/chatbot/mazwi/proactive",
            "/api/snapshot",
            "/api/alerts",
            "/api/reminders",
            "/api/news",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
