//! Read-only metric, alert, reminder and news endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::debug;

use prosuite_core::MetricsSnapshot;
use prosuite_signals::{generate_alerts, generate_reminders, Alert, NewsItem, Reminder};

use crate::state::AppState;

/// Current metrics snapshot.
#[utoipa::path(
    get,
    path = "/api/snapshot",
    tag = "Signals",
    responses(
        (status = 200, description = "Metrics snapshot", body = Object)
    )
)]
pub async fn snapshot(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.snapshot())
}

/// Alerts raised by the current snapshot, in rule order.
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "Signals",
    responses(
        (status = 200, description = "Active alerts", body = Vec<Object>)
    )
)]
pub async fn alerts(State(state): State<Arc<AppState>>) -> Json<Vec<Alert>> {
    let alerts = generate_alerts(&state.snapshot());
    debug!(count = alerts.len(), "alerts generated");
    Json(alerts)
}

/// Upcoming reminders.
#[utoipa::path(
    get,
    path = "/api/reminders",
    tag = "Signals",
    responses(
        (status = 200, description = "Scheduled reminders", body = Vec<Object>)
    )
)]
pub async fn reminders(State(state): State<Arc<AppState>>) -> Json<Vec<Reminder>> {
    Json(generate_reminders(&state.snapshot()))
}

/// Industry headlines from the same feed the chat news topic reads.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = "Signals",
    responses(
        (status = 200, description = "News headlines", body = Vec<Object>)
    )
)]
pub async fn news(State(state): State<Arc<AppState>>) -> Json<Vec<NewsItem>> {
    let feed = state.mazwi.news_feed();
    let items = feed.fetch().await;
    debug!(feed = feed.feed_name(), count = items.len(), "news fetched");
    Json(items)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use chrono::Utc;

    use prosuite_core::{Config, Dataset};
    use prosuite_mazwi::Mazwi;
    use prosuite_signals::{NewsFeed, NewsItem};

    use crate::router::test_support::{app, app_with, app_with_state, get};
    use crate::state::AppState;

    struct OneHeadline;

    #[async_trait]
    impl NewsFeed for OneHeadline {
        async fn fetch(&self) -> Vec<NewsItem> {
            vec![NewsItem {
                id: uuid::Uuid::nil(),
                title: "Board approves new risk appetite".to_string(),
                summary: String::new(),
                source: "Internal".to_string(),
                url: "https://intranet.example/news/1".to_string(),
                category: "Governance".to_string(),
                published_at: Utc::now(),
            }]
        }

        fn feed_name(&self) -> &str {
            "one-headline"
        }
    }

    #[tokio::test]
    async fn snapshot_reports_derived_totals() {
        let (status, body) = get(app(), "/api/snapshot").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["compliance"]["score"], 75);
        assert_eq!(body["incidents"]["total"], 5);
    }

    #[tokio::test]
    async fn alerts_follow_rule_order() {
        let (status, body) = get(app(), "/api/alerts").await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, ["Critical Risks Detected", "Critical Incidents Active"]);
        assert_eq!(body[0]["type"], "critical");
    }

    #[tokio::test]
    async fn empty_dataset_only_alerts_on_compliance() {
        let (status, body) = get(app_with(Dataset::default()), "/api/alerts").await;
        assert_eq!(status, StatusCode::OK);
        let alerts = body.as_array().unwrap();
        // An empty standards list scores 0, which is below target.
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["title"], "Compliance Score Below Target");
    }

    #[tokio::test]
    async fn reminders_are_open_and_ordered() {
        let (_, body) = get(app(), "/api/reminders").await;
        let reminders = body.as_array().unwrap();
        assert_eq!(reminders.len(), 3);
        assert_eq!(reminders[0]["title"], "Compliance Remediation");
        assert!(reminders.iter().all(|r| r["completed"] == false));
    }

    #[tokio::test]
    async fn news_reads_the_assistant_feed() {
        let mazwi = Mazwi::new("Mazwi", Arc::new(OneHeadline));
        let state = AppState::from_parts(Config::default(), mazwi, Dataset::builtin());
        let (status, body) = get(app_with_state(state), "/api/news").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Board approves new risk appetite");
    }

    #[tokio::test]
    async fn news_returns_headlines() {
        let (status, body) = get(app(), "/api/news").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
    }
}
