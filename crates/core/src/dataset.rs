//! Compiled-in ProSuite demo dataset.
//!
//! Every snapshot is derived from these records. Severity, status and
//! category fields hold the small integer ids resolved through
//! [`crate::labels`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskRecord {
    pub id: u32,
    pub title: &'static str,
    pub severity_id: u8,
    pub category_id: u8,
    pub status_id: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRecord {
    pub id: u32,
    pub name: &'static str,
    pub category_id: u8,
    pub status_id: u8,
    pub business_critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncidentRecord {
    pub id: u32,
    pub title: &'static str,
    pub severity_id: u8,
    pub status_id: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardRecord {
    pub id: u32,
    pub name: &'static str,
    pub compliant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRecord {
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRecord {
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LicensePool {
    pub total: u32,
    pub used: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRecord {
    pub user: &'static str,
    pub action: &'static str,
    pub area: &'static str,
    /// RFC 3339 timestamp.
    pub at: &'static str,
}

/// The source arrays a [`crate::MetricsSnapshot`] is computed from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub risks: Vec<RiskRecord>,
    pub assets: Vec<AssetRecord>,
    pub incidents: Vec<IncidentRecord>,
    pub standards: Vec<StandardRecord>,
    pub modules: Vec<ModuleRecord>,
    pub users: Vec<UserRecord>,
    pub licenses: LicensePool,
    pub activity: Vec<ActivityRecord>,
}

impl Dataset {
    pub fn builtin() -> Self {
        Self {
            risks: RISKS.to_vec(),
            assets: ASSETS.to_vec(),
            incidents: INCIDENTS.to_vec(),
            standards: STANDARDS.to_vec(),
            modules: MODULES.to_vec(),
            users: USERS.to_vec(),
            licenses: LICENSES,
            activity: ACTIVITY.to_vec(),
        }
    }
}

// ── Demo records ─────────────────────────────────────────────

#[rustfmt::skip]
const RISKS: &[RiskRecord] = &[
    RiskRecord { id: 1, title: "Unpatched perimeter firewall firmware", severity_id: 1, category_id: 4, status_id: 1 },
    RiskRecord { id: 2, title: "Single supplier dependency for payroll", severity_id: 2, category_id: 1, status_id: 2 },
    RiskRecord { id: 3, title: "Foreign exchange exposure on USD contracts", severity_id: 2, category_id: 2, status_id: 1 },
    RiskRecord { id: 4, title: "Phishing susceptibility in finance team", severity_id: 2, category_id: 4, status_id: 2 },
    RiskRecord { id: 5, title: "Board succession plan not documented", severity_id: 3, category_id: 3, status_id: 1 },
    RiskRecord { id: 6, title: "Backup restore never tested", severity_id: 3, category_id: 1, status_id: 2 },
    RiskRecord { id: 7, title: "Ageing laptop fleet", severity_id: 4, category_id: 1, status_id: 3 },
    RiskRecord { id: 8, title: "Vendor contract renewal slippage", severity_id: 4, category_id: 2, status_id: 4 },
];

#[rustfmt::skip]
const ASSETS: &[AssetRecord] = &[
    AssetRecord { id: 1, name: "Core ERP server", category_id: 1, status_id: 1, business_critical: true },
    AssetRecord { id: 2, name: "Customer database", category_id: 3, status_id: 1, business_critical: true },
    AssetRecord { id: 3, name: "Payroll application", category_id: 2, status_id: 1, business_critical: true },
    AssetRecord { id: 4, name: "Branch office router", category_id: 4, status_id: 2, business_critical: false },
    AssetRecord { id: 5, name: "Document management system", category_id: 2, status_id: 1, business_critical: false },
    AssetRecord { id: 6, name: "Finance team laptops", category_id: 1, status_id: 2, business_critical: false },
    AssetRecord { id: 7, name: "HR records archive", category_id: 3, status_id: 4, business_critical: false },
];

#[rustfmt::skip]
const INCIDENTS: &[IncidentRecord] = &[
    IncidentRecord { id: 1, title: "Suspicious login from unknown country", severity_id: 1, status_id: 1 },
    IncidentRecord { id: 2, title: "Email gateway outage", severity_id: 2, status_id: 2 },
    IncidentRecord { id: 3, title: "Lost access card reported", severity_id: 3, status_id: 3 },
    IncidentRecord { id: 4, title: "Malware quarantined on workstation", severity_id: 2, status_id: 4 },
    IncidentRecord { id: 5, title: "Misdirected customer invoice", severity_id: 3, status_id: 1 },
];

#[rustfmt::skip]
const STANDARDS: &[StandardRecord] = &[
    StandardRecord { id: 1, name: "ISO 27001", compliant: true },
    StandardRecord { id: 2, name: "POPIA", compliant: true },
    StandardRecord { id: 3, name: "King IV", compliant: true },
    StandardRecord { id: 4, name: "PCI DSS", compliant: false },
    StandardRecord { id: 5, name: "NIST CSF", compliant: true },
    StandardRecord { id: 6, name: "GDPR", compliant: false },
    StandardRecord { id: 7, name: "ISO 22301", compliant: true },
    StandardRecord { id: 8, name: "SOC 2", compliant: true },
];

#[rustfmt::skip]
const MODULES: &[ModuleRecord] = &[
    ModuleRecord { name: "Risk Management", active: true },
    ModuleRecord { name: "Asset Management", active: true },
    ModuleRecord { name: "Incident Management", active: true },
    ModuleRecord { name: "Compliance", active: true },
    ModuleRecord { name: "Audit", active: true },
    ModuleRecord { name: "Governance", active: false },
    ModuleRecord { name: "Performance", active: true },
];

#[rustfmt::skip]
const USERS: &[UserRecord] = &[
    UserRecord { name: "Thandi Nkosi", active: true },
    UserRecord { name: "Pieter van Wyk", active: true },
    UserRecord { name: "Ayesha Patel", active: true },
    UserRecord { name: "Sipho Dlamini", active: false },
    UserRecord { name: "Lerato Mokoena", active: true },
    UserRecord { name: "James Smith", active: true },
];

const LICENSES: LicensePool = LicensePool { total: 25, used: 18 };

#[rustfmt::skip]
const ACTIVITY: &[ActivityRecord] = &[
    ActivityRecord { user: "Thandi Nkosi", action: "Updated risk treatment plan", area: "Risk Management", at: "2026-10-17T14:32:00Z" },
    ActivityRecord { user: "Ayesha Patel", action: "Logged incident #5", area: "Incident Management", at: "2026-10-17T11:05:00Z" },
    ActivityRecord { user: "Pieter van Wyk", action: "Uploaded PCI DSS evidence", area: "Compliance", at: "2026-10-16T16:48:00Z" },
    ActivityRecord { user: "Lerato Mokoena", action: "Registered new asset", area: "Asset Management", at: "2026-10-16T09:20:00Z" },
    ActivityRecord { user: "James Smith", action: "Closed audit finding AF-12", area: "Audit", at: "2026-10-15T13:10:00Z" },
];
