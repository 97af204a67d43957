//! Scheduled housekeeping reminders.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prosuite_core::MetricsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: ReminderPriority,
    pub module: String,
    /// Nothing in the system completes reminders; always `false`.
    pub completed: bool,
}

struct ReminderRule {
    applies: fn(&MetricsSnapshot) -> bool,
    title: &'static str,
    describe: fn(&MetricsSnapshot) -> String,
    due_in_days: i64,
    priority: ReminderPriority,
    module: &'static str,
}

const REMINDER_RULES: &[ReminderRule] = &[
    ReminderRule {
        applies: |s| s.compliance.non_compliant() > 0,
        title: "Compliance Remediation",
        describe: |s| {
            let gaps = s.compliance.gaps();
            if gaps.is_empty() {
                format!(
                    "Close remediation actions for {} non-compliant standard(s).",
                    s.compliance.non_compliant()
                )
            } else {
                format!("Close remediation actions for {}.", gaps.join(", "))
            }
        },
        due_in_days: 7,
        priority: ReminderPriority::High,
        module: "Compliance",
    },
    ReminderRule {
        applies: |s| s.assets.total > 0,
        title: "Asset Inventory Review",
        describe: |s| {
            format!(
                "Confirm owners and classification for all {} registered assets.",
                s.assets.total
            )
        },
        due_in_days: 14,
        priority: ReminderPriority::Medium,
        module: "Asset Management",
    },
    ReminderRule {
        applies: |s| s.risks.total > 0,
        title: "Quarterly Risk Review",
        describe: |s| {
            format!(
                "Re-score the {} risks in the register with their owners.",
                s.risks.total
            )
        },
        due_in_days: 30,
        priority: ReminderPriority::Medium,
        module: "Risk Management",
    },
];

/// Generate reminders due relative to the current time.
pub fn generate_reminders(snapshot: &MetricsSnapshot) -> Vec<Reminder> {
    generate_reminders_at(snapshot, Utc::now())
}

/// Generate reminders due relative to `now`.
pub fn generate_reminders_at(snapshot: &MetricsSnapshot, now: DateTime<Utc>) -> Vec<Reminder> {
    REMINDER_RULES
        .iter()
        .filter(|rule| (rule.applies)(snapshot))
        .map(|rule| Reminder {
            id: Uuid::new_v4(),
            title: rule.title.to_string(),
            description: (rule.describe)(snapshot),
            due_date: now + Duration::days(rule.due_in_days),
            priority: rule.priority,
            module: rule.module.to_string(),
            completed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosuite_core::{AssetMetrics, ComplianceMetrics, RiskMetrics};

    #[test]
    fn empty_snapshot_has_no_reminders() {
        assert!(generate_reminders(&MetricsSnapshot::default()).is_empty());
    }

    #[test]
    fn builtin_snapshot_gets_all_three_in_order() {
        let now = Utc::now();
        let reminders = generate_reminders_at(&prosuite_core::snapshot(), now);
        let titles: Vec<_> = reminders.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Compliance Remediation", "Asset Inventory Review", "Quarterly Risk Review"]
        );
        let offsets: Vec<_> = reminders.iter().map(|r| (r.due_date - now).num_days()).collect();
        assert_eq!(offsets, [7, 14, 30]);
        assert!(reminders.iter().all(|r| !r.completed));
        assert!(reminders[0].description.contains("PCI DSS"));
    }

    #[test]
    fn guards_are_independent() {
        let snap = MetricsSnapshot {
            risks: RiskMetrics { total: 2, ..RiskMetrics::default() },
            assets: AssetMetrics::default(),
            compliance: ComplianceMetrics::new(100, 5, 0),
            ..MetricsSnapshot::default()
        };
        let reminders = generate_reminders(&snap);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].module, "Risk Management");
        assert_eq!(reminders[0].priority, ReminderPriority::Medium);
    }

    #[test]
    fn remediation_without_named_gaps_uses_count() {
        let snap = MetricsSnapshot {
            compliance: ComplianceMetrics::new(60, 3, 2),
            ..MetricsSnapshot::default()
        };
        let reminders = generate_reminders(&snap);
        assert_eq!(reminders.len(), 1);
        assert!(reminders[0].description.contains("2 non-compliant"));
        assert_eq!(reminders[0].priority, ReminderPriority::High);
    }
}
