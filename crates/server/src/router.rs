//! HTTP router construction.
//!
//! Assembles the Axum routes, CORS middleware and OpenAPI docs into a single `Router`.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server.cors_origin);

    Router::new()
        .route("/health", get(api::health))
        .route("/api/snapshot", get(api::snapshot))
        .route("/api/alerts", get(api::alerts))
        .route("/api/reminders", get(api::reminders))
        .route("/api/news", get(api::news))
        .route("/api/chatbot/mazwi", post(api::mazwi))
        .route("/api/chatbot/mazwi/proactive", post(api::mazwi_proactive))
        .layer(cors)
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}

/// `*` allows any origin; anything else is pinned as the single allowed origin.
fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(e) => {
            warn!(origin, error = %e, "invalid CORS origin, allowing any");
            CorsLayer::permissive()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt; // for `oneshot`

    use prosuite_core::{Config, Dataset};

    use crate::state::AppState;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.mazwi.news_latency_ms = 0;
        config
    }

    pub fn app() -> Router {
        app_with(Dataset::builtin())
    }

    pub fn app_with(dataset: Dataset) -> Router {
        app_with_state(AppState::with_dataset(test_config(), dataset))
    }

    pub fn app_with_state(state: AppState) -> Router {
        super::build_router(Arc::new(state))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(app, request).await
    }

    pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(app, uri, &body.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::test_support::{app, get};

    #[tokio::test]
    async fn health_reports_assistant() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["assistant"], "Mazwi");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = get(app(), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn docs_are_served() {
        let (status, _) = get(app(), "/docs").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn pinned_origin_builds() {
        let _ = super::cors_layer("https://prosuite.example");
        let _ = super::cors_layer("bad\norigin");
    }
}
