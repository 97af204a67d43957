//! Proactive signals for the ProSuite assistant.
//!
//! This crate provides:
//! - Threshold alerts derived from a `MetricsSnapshot`
//! - Housekeeping reminders with fixed due-date offsets
//! - A `NewsFeed` trait and the static external news feed
//! - `ProactiveDigest`, the bundle the periodic notification route returns

pub mod alerts;
pub mod news;
pub mod reminders;

use serde::Serialize;

use prosuite_core::MetricsSnapshot;

pub use alerts::{generate_alerts, generate_alerts_at, Alert, AlertSeverity};
pub use news::{fetch_external_news, fetch_external_news_with, NewsFeed, NewsItem, StaticNewsFeed};
pub use reminders::{generate_reminders, generate_reminders_at, Reminder, ReminderPriority};

/// Alerts and reminders generated together for one notification tick.
#[derive(Debug, Clone, Serialize)]
pub struct ProactiveDigest {
    pub alerts: Vec<Alert>,
    pub reminders: Vec<Reminder>,
}

impl ProactiveDigest {
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty() && self.reminders.is_empty()
    }

    /// Alerts that ask the user to act.
    pub fn actionable(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.action_required)
    }
}

pub fn proactive_digest(snapshot: &MetricsSnapshot) -> ProactiveDigest {
    let now = chrono::Utc::now();
    ProactiveDigest {
        alerts: generate_alerts_at(snapshot, now),
        reminders: generate_reminders_at(snapshot, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_of_builtin_snapshot() {
        let digest = proactive_digest(&prosuite_core::snapshot());
        assert!(!digest.is_empty());
        assert_eq!(digest.alerts.len(), 2);
        assert_eq!(digest.reminders.len(), 3);
        assert_eq!(digest.actionable().count(), 2);
        assert_eq!(digest.alerts[0].timestamp, digest.alerts[1].timestamp);
    }

    #[test]
    fn digest_of_empty_snapshot() {
        let snap = MetricsSnapshot {
            compliance: prosuite_core::ComplianceMetrics::new(100, 0, 0),
            ..MetricsSnapshot::default()
        };
        assert!(proactive_digest(&snap).is_empty());
    }
}
