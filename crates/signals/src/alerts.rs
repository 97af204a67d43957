//! Threshold alerts over a [`MetricsSnapshot`].
//!
//! Rules are evaluated in table order. Every rule whose predicate holds
//! appends exactly one alert; nothing is deduplicated or suppressed across
//! calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prosuite_core::MetricsSnapshot;

/// Alert severity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Critical => write!(f, "critical"),
            AlertSeverity::Warning => write!(f, "warning"),
            AlertSeverity::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    /// Originating area, e.g. "Risk Management".
    pub module: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub action_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_path: Option<String>,
}

/// The parts of an alert that do not depend on the clock or id generator.
struct AlertTemplate {
    severity: AlertSeverity,
    module: &'static str,
    title: &'static str,
    message: String,
    action_required: bool,
    action_path: Option<&'static str>,
}

struct AlertRule {
    name: &'static str,
    applies: fn(&MetricsSnapshot) -> bool,
    build: fn(&MetricsSnapshot) -> AlertTemplate,
}

const HIGH_RISK_LIMIT: u32 = 3;
const OPEN_INCIDENT_LIMIT: u32 = 5;
const COMPLIANCE_FLOOR: u32 = 70;
const LICENSE_CEILING: u32 = 90;

const ALERT_RULES: &[AlertRule] = &[
    AlertRule {
        name: "critical_risks",
        applies: |s| s.risks.critical > 0,
        build: |s| AlertTemplate {
            severity: AlertSeverity::Critical,
            module: "Risk Management",
            title: "Critical Risks Detected",
            message: format!(
                "{} critical risk(s) require immediate attention.",
                s.risks.critical
            ),
            action_required: true,
            action_path: Some("/dashboard/risk"),
        },
    },
    AlertRule {
        name: "high_risk_volume",
        applies: |s| s.risks.high > HIGH_RISK_LIMIT,
        build: |s| AlertTemplate {
            severity: AlertSeverity::Warning,
            module: "Risk Management",
            title: "High Risk Volume",
            message: format!(
                "{} high risks are open, above the limit of {}. Review treatment plans.",
                s.risks.high, HIGH_RISK_LIMIT
            ),
            action_required: true,
            action_path: Some("/dashboard/risk"),
        },
    },
    AlertRule {
        name: "critical_incidents",
        applies: |s| s.incidents.critical() > 0,
        build: |s| AlertTemplate {
            severity: AlertSeverity::Critical,
            module: "Incident Management",
            title: "Critical Incidents Active",
            message: format!(
                "{} critical incident(s) need an incident lead.",
                s.incidents.critical()
            ),
            action_required: true,
            action_path: Some("/dashboard/incident"),
        },
    },
    AlertRule {
        name: "open_incident_backlog",
        applies: |s| s.incidents.open() > OPEN_INCIDENT_LIMIT,
        build: |s| AlertTemplate {
            severity: AlertSeverity::Warning,
            module: "Incident Management",
            title: "Incident Backlog Growing",
            message: format!(
                "{} incidents are still open. Consider reallocating responders.",
                s.incidents.open()
            ),
            action_required: false,
            action_path: Some("/dashboard/incident"),
        },
    },
    AlertRule {
        name: "low_compliance",
        applies: |s| s.compliance.score() < COMPLIANCE_FLOOR,
        build: |s| AlertTemplate {
            severity: AlertSeverity::Warning,
            module: "Compliance",
            title: "Compliance Score Below Target",
            message: format!(
                "Compliance score is {}%, below the {}% target.",
                s.compliance.score(),
                COMPLIANCE_FLOOR
            ),
            action_required: true,
            action_path: Some("/dashboard/compliance"),
        },
    },
    AlertRule {
        name: "license_utilization",
        applies: |s| s.licenses.exceeds(LICENSE_CEILING),
        build: |s| AlertTemplate {
            severity: AlertSeverity::Warning,
            module: "License Management",
            title: "License Capacity Nearly Exhausted",
            message: format!(
                "{} of {} licenses in use ({}%).",
                s.licenses.used,
                s.licenses.total,
                s.licenses.utilization().unwrap_or_default()
            ),
            action_required: false,
            action_path: Some("/settings/licenses"),
        },
    },
];

/// Generate alerts stamped with the current time.
pub fn generate_alerts(snapshot: &MetricsSnapshot) -> Vec<Alert> {
    generate_alerts_at(snapshot, Utc::now())
}

/// Generate alerts with an explicit timestamp.
pub fn generate_alerts_at(snapshot: &MetricsSnapshot, now: DateTime<Utc>) -> Vec<Alert> {
    let alerts: Vec<Alert> = ALERT_RULES
        .iter()
        .filter(|rule| (rule.applies)(snapshot))
        .map(|rule| {
            tracing::debug!(rule = rule.name, "alert rule triggered");
            let t = (rule.build)(snapshot);
            Alert {
                id: Uuid::new_v4(),
                severity: t.severity,
                module: t.module.to_string(),
                title: t.title.to_string(),
                message: t.message,
                timestamp: now,
                action_required: t.action_required,
                action_path: t.action_path.map(str::to_string),
            }
        })
        .collect();

    tracing::debug!(count = alerts.len(), "alerts generated");
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosuite_core::{ComplianceMetrics, IncidentMetrics, LicenseMetrics, RiskMetrics};

    fn quiet_snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            compliance: ComplianceMetrics::new(90, 9, 1),
            incidents: IncidentMetrics::new(3, 0, 0),
            licenses: LicenseMetrics { total: 10, used: 5 },
            ..MetricsSnapshot::default()
        }
    }

    fn signature(alerts: &[Alert]) -> Vec<(AlertSeverity, String, String, String)> {
        alerts
            .iter()
            .map(|a| (a.severity, a.module.clone(), a.title.clone(), a.message.clone()))
            .collect()
    }

    #[test]
    fn single_critical_risk_alert() {
        let snap = MetricsSnapshot {
            risks: RiskMetrics { critical: 2, ..RiskMetrics::default() },
            ..quiet_snapshot()
        };
        let alerts = generate_alerts(&snap);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].module, "Risk Management");
        assert!(alerts[0].message.starts_with("2 critical"));
    }

    #[test]
    fn quiet_snapshot_has_no_alerts() {
        assert!(generate_alerts(&quiet_snapshot()).is_empty());
    }

    #[test]
    fn all_rules_fire_in_table_order() {
        let snap = MetricsSnapshot {
            risks: RiskMetrics { critical: 1, high: 4, ..RiskMetrics::default() },
            incidents: IncidentMetrics::new(6, 1, 2),
            compliance: ComplianceMetrics::new(40, 4, 6),
            licenses: LicenseMetrics { total: 10, used: 10 },
            ..MetricsSnapshot::default()
        };
        let titles: Vec<_> = generate_alerts(&snap).into_iter().map(|a| a.title).collect();
        assert_eq!(
            titles,
            [
                "Critical Risks Detected",
                "High Risk Volume",
                "Critical Incidents Active",
                "Incident Backlog Growing",
                "Compliance Score Below Target",
                "License Capacity Nearly Exhausted",
            ]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let snap = MetricsSnapshot {
            risks: RiskMetrics { high: 3, ..RiskMetrics::default() },
            incidents: IncidentMetrics::new(5, 0, 0),
            compliance: ComplianceMetrics::new(70, 7, 3),
            // exactly 90% is not above the ceiling
            licenses: LicenseMetrics { total: 10, used: 9 },
            ..MetricsSnapshot::default()
        };
        assert!(generate_alerts(&snap).is_empty());
    }

    #[test]
    fn license_ceiling_compares_unrounded_usage() {
        // 90.04% rounds to 90 but is still above the ceiling
        let snap = MetricsSnapshot {
            licenses: LicenseMetrics { total: 10000, used: 9004 },
            ..quiet_snapshot()
        };
        let alerts = generate_alerts(&snap);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].module, "License Management");
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].message, "9004 of 10000 licenses in use (90%).");
    }

    #[test]
    fn empty_license_pool_never_alerts() {
        let snap = MetricsSnapshot {
            licenses: LicenseMetrics { total: 0, used: 3 },
            ..quiet_snapshot()
        };
        assert!(generate_alerts(&snap).is_empty());
    }

    #[test]
    fn deterministic_apart_from_id_and_timestamp() {
        let snap = prosuite_core::snapshot();
        let first = generate_alerts(&snap);
        let second = generate_alerts(&snap);
        assert_eq!(signature(&first), signature(&second));
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn serializes_severity_as_type() {
        let now = Utc::now();
        let snap = MetricsSnapshot {
            risks: RiskMetrics { critical: 1, ..RiskMetrics::default() },
            ..quiet_snapshot()
        };
        let alert = &generate_alerts_at(&snap, now)[0];
        let json = serde_json::to_value(alert).unwrap();
        assert_eq!(json["type"], "critical");
        assert_eq!(json["actionRequired"], true);
        assert_eq!(json["actionPath"], "/dashboard/risk");
        assert_eq!(alert.timestamp, now);
    }
}
