//! Integer-keyed label lookup tables for the mock dataset.
//!
//! Ids outside `1..=4` resolve to [`UNKNOWN`].

pub const UNKNOWN: &str = "Unknown";

pub fn severity_label(id: u8) -> &'static str {
    match id {
        1 => "Critical",
        2 => "High",
        3 => "Medium",
        4 => "Low",
        _ => UNKNOWN,
    }
}

pub fn status_label(id: u8) -> &'static str {
    match id {
        1 => "Open",
        2 => "In Progress",
        3 => "Resolved",
        4 => "Closed",
        _ => UNKNOWN,
    }
}

pub fn asset_category_label(id: u8) -> &'static str {
    match id {
        1 => "Hardware",
        2 => "Software",
        3 => "Data",
        4 => "Network",
        _ => UNKNOWN,
    }
}

pub fn risk_category_label(id: u8) -> &'static str {
    match id {
        1 => "Operational",
        2 => "Financial",
        3 => "Strategic",
        4 => "Cybersecurity",
        _ => UNKNOWN,
    }
}
