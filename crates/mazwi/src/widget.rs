//! Chat widget session state.
//!
//! All widget state lives in one [`WidgetState`] value and only changes
//! through [`WidgetState::reduce`]. Proactive notifications that arrive while
//! the user is active are queued and flushed, in arrival order, on the first
//! tick after the idle window has elapsed.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use prosuite_signals::{Alert, AlertSeverity, Reminder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetNotification {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
}

impl From<&Alert> for WidgetNotification {
    fn from(alert: &Alert) -> Self {
        Self {
            title: alert.title.clone(),
            message: alert.message.clone(),
            severity: alert.severity,
        }
    }
}

impl From<&Reminder> for WidgetNotification {
    fn from(reminder: &Reminder) -> Self {
        Self {
            title: reminder.title.clone(),
            message: reminder.description.clone(),
            severity: AlertSeverity::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    Open,
    Close,
    Minimize,
    Restore,
    Typing { at: DateTime<Utc> },
    MessageSent { at: DateTime<Utc> },
    NotificationArrived { notification: WidgetNotification, at: DateTime<Utc> },
    Tick { now: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    pub open: bool,
    pub minimized: bool,
    /// Notifications delivered while the widget was closed or minimized.
    pub unread: u32,
    last_activity: Option<DateTime<Utc>>,
    idle_window: Duration,
    queue: VecDeque<WidgetNotification>,
}

impl WidgetState {
    pub fn new(idle_window: Duration) -> Self {
        Self {
            open: false,
            minimized: false,
            unread: 0,
            last_activity: None,
            idle_window,
            queue: VecDeque::new(),
        }
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_activity
    }

    fn is_idle(&self, now: DateTime<Utc>) -> bool {
        match self.last_activity {
            None => true,
            Some(at) => now - at >= self.idle_window,
        }
    }

    fn visible(&self) -> bool {
        self.open && !self.minimized
    }

    fn deliver(&mut self, batch: Vec<WidgetNotification>) -> Vec<WidgetNotification> {
        if !self.visible() {
            self.unread += batch.len() as u32;
        }
        batch
    }

    /// Apply `event`, returning the new state and any notifications that
    /// should be shown now.
    pub fn reduce(mut self, event: WidgetEvent) -> (Self, Vec<WidgetNotification>) {
        let delivered = match event {
            WidgetEvent::Open => {
                self.open = true;
                self.minimized = false;
                self.unread = 0;
                Vec::new()
            }
            WidgetEvent::Close => {
                self.open = false;
                self.minimized = false;
                Vec::new()
            }
            WidgetEvent::Minimize => {
                if self.open {
                    self.minimized = true;
                }
                Vec::new()
            }
            WidgetEvent::Restore => {
                if self.open {
                    self.minimized = false;
                    self.unread = 0;
                }
                Vec::new()
            }
            WidgetEvent::Typing { at } | WidgetEvent::MessageSent { at } => {
                self.last_activity = Some(at);
                Vec::new()
            }
            WidgetEvent::NotificationArrived { notification, at } => {
                if self.is_idle(at) && self.queue.is_empty() {
                    self.deliver(vec![notification])
                } else {
                    self.queue.push_back(notification);
                    Vec::new()
                }
            }
            WidgetEvent::Tick { now } => {
                if self.is_idle(now) && !self.queue.is_empty() {
                    let batch: Vec<_> = self.queue.drain(..).collect();
                    self.deliver(batch)
                } else {
                    Vec::new()
                }
            }
        };
        (self, delivered)
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(Duration::seconds(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str) -> WidgetNotification {
        WidgetNotification {
            title: title.to_string(),
            message: String::new(),
            severity: AlertSeverity::Warning,
        }
    }

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn arrive(title: &str, secs: i64) -> WidgetEvent {
        WidgetEvent::NotificationArrived {
            notification: note(title),
            at: t(secs),
        }
    }

    #[test]
    fn idle_arrivals_are_delivered_immediately() {
        let state = WidgetState::default().reduce(WidgetEvent::Open).0;
        let (state, shown) = state.reduce(arrive("a", 0));
        assert_eq!(shown, [note("a")]);
        assert_eq!(state.queued(), 0);
        assert_eq!(state.unread, 0);
    }

    #[test]
    fn arrivals_while_typing_wait_for_idle_window() {
        let state = WidgetState::new(Duration::seconds(5)).reduce(WidgetEvent::Open).0;
        let (state, _) = state.reduce(WidgetEvent::Typing { at: t(100) });
        let (state, shown) = state.reduce(arrive("a", 101));
        assert!(shown.is_empty());
        let (state, shown) = state.reduce(arrive("b", 102));
        assert!(shown.is_empty());
        assert_eq!(state.queued(), 2);

        let (state, shown) = state.reduce(WidgetEvent::Tick { now: t(104) });
        assert!(shown.is_empty());

        let (state, shown) = state.reduce(WidgetEvent::Tick { now: t(105) });
        assert_eq!(shown, [note("a"), note("b")]);
        assert_eq!(state.queued(), 0);
    }

    #[test]
    fn idle_arrival_queues_behind_pending_batch() {
        let state = WidgetState::new(Duration::seconds(5));
        let (state, _) = state.reduce(WidgetEvent::MessageSent { at: t(0) });
        let (state, _) = state.reduce(arrive("a", 1));
        let (state, shown) = state.reduce(arrive("b", 9));
        assert!(shown.is_empty());
        let (_, shown) = state.reduce(WidgetEvent::Tick { now: t(9) });
        assert_eq!(shown, [note("a"), note("b")]);
    }

    #[test]
    fn hidden_deliveries_count_as_unread() {
        let state = WidgetState::default();
        let (state, shown) = state.reduce(arrive("a", 0));
        assert_eq!(shown.len(), 1);
        assert_eq!(state.unread, 1);

        let state = state.reduce(WidgetEvent::Open).0;
        let state = state.reduce(WidgetEvent::Minimize).0;
        assert!(state.minimized);
        let (state, _) = state.reduce(arrive("b", 1));
        assert_eq!(state.unread, 1);

        let state = state.reduce(WidgetEvent::Restore).0;
        assert!(!state.minimized);
        assert_eq!(state.unread, 0);
    }

    #[test]
    fn minimize_is_ignored_when_closed() {
        let state = WidgetState::default().reduce(WidgetEvent::Minimize).0;
        assert!(!state.minimized);
        let state = state.reduce(WidgetEvent::Open).0.reduce(WidgetEvent::Close).0;
        assert!(!state.open);
        assert!(!state.minimized);
    }

    #[test]
    fn alerts_convert_to_notifications() {
        let alerts = prosuite_signals::generate_alerts(&prosuite_core::snapshot());
        let n = WidgetNotification::from(&alerts[0]);
        assert_eq!(n.title, "Critical Risks Detected");
        assert_eq!(n.severity, AlertSeverity::Critical);
    }
}
