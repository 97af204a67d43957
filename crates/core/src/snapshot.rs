//! Read-only metric aggregates consumed by the signal generators and the
//! Mazwi intent router.
//!
//! A [`MetricsSnapshot`] is rebuilt for every request and never mutated.
//! Incident and compliance totals are derived in their constructors so
//! `open + closed == total` and `compliant + non_compliant == total_standards`
//! always hold.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::percentage;
use crate::labels;

/// Number of example records carried per area.
const EXAMPLE_LIMIT: usize = 3;

/// A single example record surfaced in chat answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskMetrics {
    pub total: u32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub examples: Vec<RecordSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetMetrics {
    pub total: u32,
    /// Assets flagged business-critical.
    pub critical: u32,
    /// `(category label, count)` in first-seen order.
    pub by_category: Vec<(String, u32)>,
    pub examples: Vec<RecordSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IncidentMetrics {
    total: u32,
    open: u32,
    closed: u32,
    critical: u32,
    examples: Vec<RecordSummary>,
}

impl IncidentMetrics {
    pub fn new(open: u32, closed: u32, critical: u32) -> Self {
        Self {
            total: open.saturating_add(closed),
            open,
            closed,
            critical,
            examples: Vec::new(),
        }
    }

    pub fn with_examples(mut self, examples: Vec<RecordSummary>) -> Self {
        self.examples = examples;
        self
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn open(&self) -> u32 {
        self.open
    }

    pub fn closed(&self) -> u32 {
        self.closed
    }

    pub fn critical(&self) -> u32 {
        self.critical
    }

    pub fn examples(&self) -> &[RecordSummary] {
        &self.examples
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceMetrics {
    score: u32,
    compliant: u32,
    non_compliant: u32,
    total_standards: u32,
    /// Names of standards currently failing.
    gaps: Vec<String>,
}

impl ComplianceMetrics {
    /// `score` is clamped to `0..=100`.
    pub fn new(score: u32, compliant: u32, non_compliant: u32) -> Self {
        Self {
            score: score.min(100),
            compliant,
            non_compliant,
            total_standards: compliant.saturating_add(non_compliant),
            gaps: Vec::new(),
        }
    }

    pub fn with_gaps(mut self, gaps: Vec<String>) -> Self {
        self.gaps = gaps;
        self
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn compliant(&self) -> u32 {
        self.compliant
    }

    pub fn non_compliant(&self) -> u32 {
        self.non_compliant
    }

    pub fn total_standards(&self) -> u32 {
        self.total_standards
    }

    pub fn gaps(&self) -> &[String] {
        &self.gaps
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModuleMetrics {
    pub total: u32,
    pub active: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserMetrics {
    pub total: u32,
    pub active: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LicenseMetrics {
    pub total: u32,
    pub used: u32,
}

impl LicenseMetrics {
    /// Rounded utilization percentage; `None` for an empty pool.
    pub fn utilization(&self) -> Option<u32> {
        percentage(self.used, self.total, "license utilization").ok()
    }

    /// Whether `used / total` is strictly above `percent`%, compared without
    /// rounding. Always false for an empty pool.
    pub fn exceeds(&self, percent: u32) -> bool {
        self.total > 0 && u64::from(self.used) * 100 > u64::from(self.total) * u64::from(percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub user: String,
    pub action: String,
    pub area: String,
    pub at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub risks: RiskMetrics,
    pub assets: AssetMetrics,
    pub incidents: IncidentMetrics,
    pub compliance: ComplianceMetrics,
    pub modules: ModuleMetrics,
    pub users: UserMetrics,
    pub licenses: LicenseMetrics,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Snapshot of the compiled-in demo dataset.
pub fn snapshot() -> MetricsSnapshot {
    snapshot_from(&Dataset::builtin())
}

/// Aggregate any dataset into a snapshot. Never fails.
pub fn snapshot_from(data: &Dataset) -> MetricsSnapshot {
    MetricsSnapshot {
        risks: risk_metrics(data),
        assets: asset_metrics(data),
        incidents: incident_metrics(data),
        compliance: compliance_metrics(data),
        modules: ModuleMetrics {
            total: data.modules.len() as u32,
            active: data.modules.iter().filter(|m| m.active).count() as u32,
        },
        users: UserMetrics {
            total: data.users.len() as u32,
            active: data.users.iter().filter(|u| u.active).count() as u32,
        },
        licenses: LicenseMetrics {
            total: data.licenses.total,
            used: data.licenses.used,
        },
        recent_activity: data
            .activity
            .iter()
            .map(|a| ActivityEntry {
                user: a.user.to_string(),
                action: a.action.to_string(),
                area: a.area.to_string(),
                at: a.at.to_string(),
            })
            .collect(),
    }
}

fn risk_metrics(data: &Dataset) -> RiskMetrics {
    let count = |sev: u8| data.risks.iter().filter(|r| r.severity_id == sev).count() as u32;
    RiskMetrics {
        total: data.risks.len() as u32,
        critical: count(1),
        high: count(2),
        medium: count(3),
        low: count(4),
        examples: data
            .risks
            .iter()
            .take(EXAMPLE_LIMIT)
            .map(|r| RecordSummary {
                id: r.id,
                title: r.title.to_string(),
                category: labels::risk_category_label(r.category_id).to_string(),
                status: labels::status_label(r.status_id).to_string(),
            })
            .collect(),
    }
}

fn asset_metrics(data: &Dataset) -> AssetMetrics {
    let mut by_category: Vec<(String, u32)> = Vec::new();
    for asset in &data.assets {
        let label = labels::asset_category_label(asset.category_id);
        match by_category.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => by_category.push((label.to_string(), 1)),
        }
    }

    AssetMetrics {
        total: data.assets.len() as u32,
        critical: data.assets.iter().filter(|a| a.business_critical).count() as u32,
        by_category,
        examples: data
            .assets
            .iter()
            .take(EXAMPLE_LIMIT)
            .map(|a| RecordSummary {
                id: a.id,
                title: a.name.to_string(),
                category: labels::asset_category_label(a.category_id).to_string(),
                status: labels::status_label(a.status_id).to_string(),
            })
            .collect(),
    }
}

/// Resolved (3) and Closed (4) count as closed; every other status,
/// including unknown ids, counts as open.
fn incident_metrics(data: &Dataset) -> IncidentMetrics {
    let closed = data
        .incidents
        .iter()
        .filter(|i| matches!(i.status_id, 3 | 4))
        .count() as u32;
    let open = data.incidents.len() as u32 - closed;
    let critical = data.incidents.iter().filter(|i| i.severity_id == 1).count() as u32;

    let examples = data
        .incidents
        .iter()
        .take(EXAMPLE_LIMIT)
        .map(|i| RecordSummary {
            id: i.id,
            title: i.title.to_string(),
            category: labels::severity_label(i.severity_id).to_string(),
            status: labels::status_label(i.status_id).to_string(),
        })
        .collect();

    IncidentMetrics::new(open, closed, critical).with_examples(examples)
}

/// An empty standards register scores 0.
fn compliance_metrics(data: &Dataset) -> ComplianceMetrics {
    let compliant = data.standards.iter().filter(|s| s.compliant).count() as u32;
    let non_compliant = data.standards.len() as u32 - compliant;
    let score = percentage(compliant, compliant + non_compliant, "compliance score").unwrap_or(0);
    let gaps = data
        .standards
        .iter()
        .filter(|s| !s.compliant)
        .map(|s| s.name.to_string())
        .collect();

    ComplianceMetrics::new(score, compliant, non_compliant).with_gaps(gaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{IncidentRecord, RiskRecord, StandardRecord};

    #[test]
    fn builtin_snapshot_counts() {
        let snap = snapshot();
        assert_eq!(snap.risks.total, 8);
        assert_eq!(snap.risks.critical, 1);
        assert_eq!(snap.risks.high, 3);
        assert_eq!(snap.risks.medium, 2);
        assert_eq!(snap.risks.low, 2);
        assert_eq!(snap.incidents.open(), 3);
        assert_eq!(snap.incidents.closed(), 2);
        assert_eq!(snap.incidents.critical(), 1);
        assert_eq!(snap.compliance.score(), 75);
        assert_eq!(snap.compliance.gaps(), ["PCI DSS", "GDPR"]);
        assert_eq!(snap.licenses.utilization(), Some(72));
        assert_eq!(snap.risks.examples.len(), EXAMPLE_LIMIT);
    }

    #[test]
    fn invariants_hold_by_construction() {
        for (open, closed) in [(0, 0), (3, 2), (10, 0), (0, 7)] {
            let m = IncidentMetrics::new(open, closed, 0);
            assert_eq!(m.open() + m.closed(), m.total());
        }
        for (ok, bad) in [(0, 0), (7, 3), (0, 4)] {
            let c = ComplianceMetrics::new(50, ok, bad);
            assert_eq!(c.compliant() + c.non_compliant(), c.total_standards());
        }
        let snap = snapshot();
        assert_eq!(snap.incidents.open() + snap.incidents.closed(), snap.incidents.total());
        assert_eq!(
            snap.compliance.compliant() + snap.compliance.non_compliant(),
            snap.compliance.total_standards()
        );
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        assert_eq!(IncidentMetrics::new(u32::MAX, 5, 0).total(), u32::MAX);
        assert_eq!(ComplianceMetrics::new(0, u32::MAX, 1).total_standards(), u32::MAX);
    }

    #[test]
    fn license_threshold_ignores_rounding() {
        let pool = LicenseMetrics { total: 10000, used: 9004 };
        assert_eq!(pool.utilization(), Some(90));
        assert!(pool.exceeds(90));
        assert!(!LicenseMetrics { total: 10, used: 9 }.exceeds(90));
        assert!(!LicenseMetrics { total: 0, used: 5 }.exceeds(90));
        assert!(LicenseMetrics { total: u32::MAX, used: u32::MAX }.exceeds(90));
    }

    #[test]
    fn unknown_ids_surface_as_unknown_labels() {
        let data = Dataset {
            risks: vec![RiskRecord {
                id: 9,
                title: "Odd",
                severity_id: 7,
                category_id: 0,
                status_id: 9,
            }],
            incidents: vec![IncidentRecord { id: 1, title: "Limbo", severity_id: 9, status_id: 9 }],
            ..Dataset::default()
        };
        let snap = snapshot_from(&data);
        assert_eq!(snap.risks.total, 1);
        assert_eq!(snap.risks.critical + snap.risks.high + snap.risks.medium + snap.risks.low, 0);
        assert_eq!(snap.risks.examples[0].category, labels::UNKNOWN);
        assert_eq!(snap.risks.examples[0].status, labels::UNKNOWN);
        // unknown status counts as open
        assert_eq!(snap.incidents.open(), 1);
        assert_eq!(snap.incidents.examples()[0].category, labels::UNKNOWN);
    }

    #[test]
    fn empty_dataset_has_zero_scores() {
        let snap = snapshot_from(&Dataset::default());
        assert_eq!(snap.compliance.score(), 0);
        assert_eq!(snap.compliance.total_standards(), 0);
        assert_eq!(snap.licenses.utilization(), None);
    }

    #[test]
    fn compliance_score_is_clamped() {
        let data = Dataset {
            standards: vec![StandardRecord { id: 1, name: "ISO 27001", compliant: true }],
            ..Dataset::default()
        };
        assert_eq!(snapshot_from(&data).compliance.score(), 100);
        assert_eq!(ComplianceMetrics::new(250, 1, 0).score(), 100);
    }
}
