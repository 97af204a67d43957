//! Reply builders, one per [`Topic`](crate::router::Topic).
//!
//! Every builder is a pure function of the [`Context`]. Percentages shown to
//! the user go through [`prosuite_core::percentage`], so an empty pool is
//! reported as an error instead of a made-up figure.

use std::fmt::Write;

use prosuite_core::percentage;
use prosuite_signals::{generate_alerts, generate_reminders_at, AlertSeverity, ReminderPriority};

use crate::content::{ChartDatum, ChartKind, ContentBlock};
use crate::error::MazwiError;
use crate::router::{Context, MazwiReply};

type Reply = Result<MazwiReply, MazwiError>;

const RED: &str = "#dc2626";
const ORANGE: &str = "#f97316";
const YELLOW: &str = "#eab308";
const GREEN: &str = "#22c55e";
const BLUE: &str = "#3b82f6";

/// License usage above this share of the pool gets a capacity warning.
const LICENSE_CAPACITY_WARNING: u32 = 90;

/// Compliance recommendation band. Lower bounds are inclusive: 70 is fair,
/// 85 is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceBand {
    Poor,
    Fair,
    Good,
}

impl ComplianceBand {
    pub fn from_score(score: u32) -> Self {
        if score < 70 {
            ComplianceBand::Poor
        } else if score < 85 {
            ComplianceBand::Fair
        } else {
            ComplianceBand::Good
        }
    }
}

pub fn greeting_text(assistant: &str) -> String {
    format!(
        "Hello! I'm {assistant}, your ProSuite GRC assistant. Ask me about risks, \
         incidents, compliance or anything else on your dashboards."
    )
}

pub fn help_menu(assistant: &str) -> String {
    format!(
        "I'm {assistant}. Here's what I can help you with:\n\
         • Risks: \"How many risks do we have?\"\n\
         • Assets: \"Show the asset inventory\"\n\
         • Incidents: \"Any open incidents?\"\n\
         • Compliance: \"What is our compliance score?\"\n\
         • Governance and audit: \"Governance overview\", \"Are we audit ready?\"\n\
         • Performance: \"Show performance metrics\"\n\
         • Alerts and reminders: \"Any alerts?\", \"What's due soon?\"\n\
         • News, weather and markets: \"Latest GRC news\"\n\
         • Licenses, users and modules: \"License usage\"\n\
         • Navigation: \"Take me to the data explorer\""
    )
}

// ── Domain topics ───────────────────────────────────────────────────

pub fn risk(ctx: &Context<'_>) -> Reply {
    let r = &ctx.snapshot.risks;
    let mut text = String::new();
    writeln!(text, "There are currently {} total risks in the register:", r.total)?;
    writeln!(text, "• Critical: {}", r.critical)?;
    writeln!(text, "• High: {}", r.high)?;
    writeln!(text, "• Medium: {}", r.medium)?;
    write!(text, "• Low: {}", r.low)?;

    if !r.examples.is_empty() {
        text.push_str("\n\nRecent entries:");
        for e in &r.examples {
            write!(text, "\n• #{} {} ({}, {})", e.id, e.title, e.category, e.status)?;
        }
    }

    text.push_str("\n\n");
    if r.critical > 0 {
        write!(
            text,
            "⚠️ Prioritise treatment of the {} critical risk(s) and confirm each has an owner.",
            r.critical
        )?;
    } else if r.high > 0 {
        write!(
            text,
            "No critical risks. Review the {} high risk(s) at the next risk committee.",
            r.high
        )?;
    } else {
        text.push_str("Your risk profile is stable. Keep reviewing it quarterly.");
    }

    let mut blocks = Vec::new();
    if r.total > 0 {
        blocks.push(ContentBlock::chart(
            ChartKind::Pie,
            "Risks by Severity",
            vec![
                ChartDatum::colored("Critical", r.critical, RED),
                ChartDatum::colored("High", r.high, ORANGE),
                ChartDatum::colored("Medium", r.medium, YELLOW),
                ChartDatum::colored("Low", r.low, GREEN),
            ],
        ));
    }
    blocks.push(ContentBlock::navigation(
        "Risk Dashboard",
        "Open the risk register and treatment plans",
        "/dashboard/risk",
    ));
    Ok(MazwiReply::with_blocks(text, blocks))
}

pub fn asset(ctx: &Context<'_>) -> Reply {
    let a = &ctx.snapshot.assets;
    let mut text = String::new();
    write!(
        text,
        "You have {} assets registered, {} of them business-critical.",
        a.total, a.critical
    )?;
    if !a.by_category.is_empty() {
        text.push_str("\n\nBy category:");
        for (label, count) in &a.by_category {
            write!(text, "\n• {label}: {count}")?;
        }
    }
    if !a.examples.is_empty() {
        text.push_str("\n\nExamples:");
        for e in &a.examples {
            write!(text, "\n• {} ({}, {})", e.title, e.category, e.status)?;
        }
    }

    let mut blocks = Vec::new();
    if !a.by_category.is_empty() {
        blocks.push(ContentBlock::chart(
            ChartKind::Bar,
            "Assets by Category",
            a.by_category
                .iter()
                .map(|(label, count)| ChartDatum::new(label.as_str(), *count))
                .collect(),
        ));
    }
    blocks.push(ContentBlock::navigation(
        "Asset Dashboard",
        "Browse the asset inventory",
        "/dashboard/asset",
    ));
    Ok(MazwiReply::with_blocks(text, blocks))
}

pub fn incident(ctx: &Context<'_>) -> Reply {
    let i = &ctx.snapshot.incidents;
    let mut text = String::new();
    write!(
        text,
        "There are {} incidents on record: {} open and {} closed.\n• Critical: {}",
        i.total(),
        i.open(),
        i.closed(),
        i.critical()
    )?;
    if !i.examples().is_empty() {
        text.push_str("\n\nLatest incidents:");
        for e in i.examples() {
            write!(text, "\n• #{} {} ({} severity, {})", e.id, e.title, e.category, e.status)?;
        }
    }
    if i.critical() > 0 {
        write!(
            text,
            "\n\n⚠️ {} critical incident(s) are active. Make sure an incident lead is assigned.",
            i.critical()
        )?;
    }

    let mut blocks = Vec::new();
    if i.total() > 0 {
        blocks.push(ContentBlock::chart(
            ChartKind::Pie,
            "Incidents by Status",
            vec![
                ChartDatum::colored("Open", i.open(), ORANGE),
                ChartDatum::colored("Closed", i.closed(), GREEN),
            ],
        ));
    }
    blocks.push(ContentBlock::navigation(
        "Incident Dashboard",
        "Track open incidents and response actions",
        "/dashboard/incident",
    ));
    Ok(MazwiReply::with_blocks(text, blocks))
}

pub fn compliance(ctx: &Context<'_>) -> Reply {
    let c = &ctx.snapshot.compliance;
    let mut text = String::new();
    write!(
        text,
        "Your overall compliance score is {}%. {} of {} standards are compliant and {} are non-compliant.",
        c.score(),
        c.compliant(),
        c.total_standards(),
        c.non_compliant()
    )?;

    match ComplianceBand::from_score(c.score()) {
        ComplianceBand::Poor => text.push_str(
            "\n\n⚠️ Your compliance score is below the recommended 70% threshold. Recommended actions:\n\
             • Assign owners to every failing control\n\
             • Schedule a gap assessment within 30 days\n\
             • Report progress to the audit committee monthly",
        ),
        ComplianceBand::Fair => text.push_str(
            "\n\nYour compliance posture is fair. To reach the 85% target:\n\
             • Close the remaining control gaps\n\
             • Refresh evidence for standards due for recertification",
        ),
        ComplianceBand::Good => text.push_str(
            "\n\nYour compliance posture is good. Keep evidence current ahead of the next audit cycle.",
        ),
    }

    if !c.gaps().is_empty() {
        write!(text, "\n\nStandards needing attention: {}", c.gaps().join(", "))?;
    }

    let mut blocks = Vec::new();
    if c.total_standards() > 0 {
        blocks.push(ContentBlock::chart(
            ChartKind::Pie,
            "Compliance Status",
            vec![
                ChartDatum::colored("Compliant", c.compliant(), GREEN),
                ChartDatum::colored("Non-compliant", c.non_compliant(), RED),
            ],
        ));
    }
    blocks.push(ContentBlock::navigation(
        "Compliance Dashboard",
        "Review standards, controls and evidence",
        "/dashboard/compliance",
    ));
    Ok(MazwiReply::with_blocks(text, blocks))
}

pub fn governance(ctx: &Context<'_>) -> Reply {
    let s = ctx.snapshot;
    let mut text = String::new();
    writeln!(text, "Governance overview:")?;
    writeln!(text, "• {} of {} platform modules are active", s.modules.active, s.modules.total)?;
    writeln!(text, "• {} active users hold GRC responsibilities", s.users.active)?;
    writeln!(text, "• Compliance score stands at {}%", s.compliance.score())?;
    write!(text, "• {} critical risk(s) should be on the next board agenda", s.risks.critical)?;
    text.push_str(
        "\n\nRecommendation: review policies annually and keep a documented \
         board reporting cadence for risk and compliance.",
    );

    Ok(MazwiReply::with_blocks(
        text,
        vec![ContentBlock::navigation(
            "Governance Dashboard",
            "Policies, committees and oversight",
            "/dashboard/governance",
        )],
    ))
}

pub fn audit(ctx: &Context<'_>) -> Reply {
    let s = ctx.snapshot;
    let mut text = String::new();
    writeln!(text, "Audit readiness:")?;
    writeln!(
        text,
        "• {} of {} standards have current evidence",
        s.compliance.compliant(),
        s.compliance.total_standards()
    )?;
    write!(text, "• {} open incident(s) may need disclosure to auditors", s.incidents.open())?;

    let audit_activity: Vec<_> = s
        .recent_activity
        .iter()
        .filter(|a| a.area == "Audit")
        .collect();
    if !audit_activity.is_empty() {
        text.push_str("\n\nRecent audit activity:");
        for a in audit_activity {
            write!(text, "\n• {} - {}", a.user, a.action)?;
        }
    }

    Ok(MazwiReply::with_blocks(
        text,
        vec![ContentBlock::navigation(
            "Audit Dashboard",
            "Audit plans, findings and follow-ups",
            "/dashboard/audit",
        )],
    ))
}

pub fn performance(ctx: &Context<'_>) -> Reply {
    let s = ctx.snapshot;
    let elevated = s.risks.critical + s.risks.high;
    let mut text = String::new();
    writeln!(text, "Performance summary:")?;
    writeln!(text, "• Elevated risks (critical + high): {elevated}")?;
    writeln!(text, "• Open incidents: {}", s.incidents.open())?;
    writeln!(text, "• Compliance gaps: {}", s.compliance.non_compliant())?;
    write!(text, "• Compliance score: {}%", s.compliance.score())?;

    Ok(MazwiReply::with_blocks(
        text,
        vec![
            ContentBlock::chart(
                ChartKind::Bar,
                "Open Items by Area",
                vec![
                    ChartDatum::colored("Elevated risks", elevated, RED),
                    ChartDatum::colored("Open incidents", s.incidents.open(), ORANGE),
                    ChartDatum::colored("Compliance gaps", s.compliance.non_compliant(), YELLOW),
                ],
            ),
            ContentBlock::navigation(
                "Performance Dashboard",
                "KPIs and trends across modules",
                "/dashboard/performance",
            ),
        ],
    ))
}

// ── Proactive signals ───────────────────────────────────────────────

pub fn alerts(ctx: &Context<'_>) -> Reply {
    let alerts = generate_alerts(ctx.snapshot);
    if alerts.is_empty() {
        return Ok(MazwiReply::plain(
            "No active alerts. All monitored thresholds are within limits.",
        ));
    }

    let mut text = String::new();
    write!(text, "You have {} active alert(s):", alerts.len())?;
    let mut blocks: Vec<ContentBlock> = Vec::new();
    for alert in &alerts {
        let tag = match alert.severity {
            AlertSeverity::Critical => "CRITICAL",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Info => "INFO",
        };
        write!(text, "\n• [{tag}] {}: {} {}", alert.module, alert.title, alert.message)?;

        if let Some(path) = &alert.action_path {
            let seen = blocks
                .iter()
                .any(|b| matches!(b, ContentBlock::Navigation(n) if &n.path == path));
            if !seen {
                blocks.push(ContentBlock::navigation(
                    alert.module.as_str(),
                    format!("Review {}", alert.title.to_lowercase()),
                    path.as_str(),
                ));
            }
        }
    }
    Ok(MazwiReply::with_blocks(text, blocks))
}

pub fn reminders(ctx: &Context<'_>) -> Reply {
    let now = chrono::Utc::now();
    let reminders = generate_reminders_at(ctx.snapshot, now);
    if reminders.is_empty() {
        return Ok(MazwiReply::plain("You have no upcoming reminders."));
    }

    let mut text = String::new();
    write!(text, "Upcoming reminders:")?;
    for r in &reminders {
        let priority = match r.priority {
            ReminderPriority::High => "high",
            ReminderPriority::Medium => "medium",
            ReminderPriority::Low => "low",
        };
        write!(
            text,
            "\n• {} (due in {} days, {} priority): {}",
            r.title,
            (r.due_date - now).num_days(),
            priority,
            r.description
        )?;
    }
    Ok(MazwiReply::plain(text))
}

pub fn news(ctx: &Context<'_>) -> Reply {
    if ctx.news.is_empty() {
        return Ok(MazwiReply::plain("No industry news is available right now."));
    }
    let mut text = String::from("Latest GRC industry news:");
    for item in ctx.news {
        write!(text, "\n• {} ({}): {}", item.title, item.source, item.summary)?;
    }
    let blocks = ctx
        .news
        .iter()
        .map(|item| ContentBlock::link(item.title.as_str(), item.url.as_str()))
        .collect();
    Ok(MazwiReply::with_blocks(text, blocks))
}

// ── External context ────────────────────────────────────────────────

pub fn weather(ctx: &Context<'_>) -> Reply {
    match ctx.location {
        Some(loc) => {
            let query =
                urlencoding::encode(&format!("weather {} {}", loc.city, loc.country)).into_owned();
            Ok(MazwiReply::with_blocks(
                format!(
                    "I don't have a live weather feed, but you can check the latest forecast for {}, {} here.",
                    loc.city, loc.country
                ),
                vec![ContentBlock::link(
                    format!("Weather in {}", loc.city),
                    format!("https://www.google.com/search?q={query}"),
                )],
            ))
        }
        None => Ok(MazwiReply::with_blocks(
            "I don't know where you are. Share your location in the chat settings and I'll point you to a local forecast.",
            vec![ContentBlock::link(
                "South African Weather Service",
                "https://www.weathersa.co.za",
            )],
        )),
    }
}

pub fn market(_ctx: &Context<'_>) -> Reply {
    Ok(MazwiReply::with_blocks(
        "Live market data isn't connected to ProSuite. These sources carry current prices and rates:",
        vec![
            ContentBlock::link("Johannesburg Stock Exchange", "https://www.jse.co.za"),
            ContentBlock::link("Reuters Markets", "https://www.reuters.com/markets/"),
            ContentBlock::link("SARB exchange rates", "https://www.resbank.co.za"),
        ],
    ))
}

// ── Platform administration ─────────────────────────────────────────

pub fn licenses(ctx: &Context<'_>) -> Reply {
    let l = &ctx.snapshot.licenses;
    let utilization = percentage(l.used, l.total, "license utilization")?;
    let mut text = String::new();
    write!(
        text,
        "{} of {} licenses are in use ({}% utilization). {} seat(s) remain.",
        l.used,
        l.total,
        utilization,
        l.total.saturating_sub(l.used)
    )?;
    if l.exceeds(LICENSE_CAPACITY_WARNING) {
        text.push_str(
            "\n\n⚠️ You are close to capacity. Plan a license top-up before onboarding new users.",
        );
    }
    Ok(MazwiReply::with_blocks(
        text,
        vec![
            ContentBlock::chart(
                ChartKind::Pie,
                "License Utilization",
                vec![
                    ChartDatum::colored("Used", l.used, BLUE),
                    ChartDatum::colored("Available", l.total.saturating_sub(l.used), GREEN),
                ],
            ),
            ContentBlock::navigation(
                "License Settings",
                "Manage seats and renewals",
                "/settings/licenses",
            ),
        ],
    ))
}

pub fn users(ctx: &Context<'_>) -> Reply {
    let u = &ctx.snapshot.users;
    let active = percentage(u.active, u.total, "user activation")?;
    Ok(MazwiReply::with_blocks(
        format!(
            "There are {} users on the platform, {} active ({}%). {} account(s) are inactive.",
            u.total,
            u.active,
            active,
            u.total.saturating_sub(u.active)
        ),
        vec![ContentBlock::navigation(
            "User Management",
            "Invite, deactivate and assign roles",
            "/settings/users",
        )],
    ))
}

pub fn modules(ctx: &Context<'_>) -> Reply {
    let m = &ctx.snapshot.modules;
    let active = percentage(m.active, m.total, "module activation")?;
    Ok(MazwiReply::with_blocks(
        format!(
            "{} of {} ProSuite modules are active ({}%).",
            m.active, m.total, active
        ),
        vec![ContentBlock::navigation(
            "Module Settings",
            "Enable or disable modules",
            "/settings/modules",
        )],
    ))
}

pub fn activity(ctx: &Context<'_>) -> Reply {
    let entries = &ctx.snapshot.recent_activity;
    if entries.is_empty() {
        return Ok(MazwiReply::plain("No recent activity has been recorded."));
    }
    let mut text = String::from("Recent activity:");
    for a in entries {
        write!(text, "\n• {} - {} ({}, {})", a.user, a.action, a.area, a.at)?;
    }
    Ok(MazwiReply::plain(text))
}

pub fn overview(ctx: &Context<'_>) -> Reply {
    let s = ctx.snapshot;
    let mut text = String::new();
    writeln!(text, "ProSuite overview:")?;
    writeln!(text, "• Risks: {} ({} critical)", s.risks.total, s.risks.critical)?;
    writeln!(text, "• Assets: {} ({} business-critical)", s.assets.total, s.assets.critical)?;
    writeln!(text, "• Incidents: {} open of {}", s.incidents.open(), s.incidents.total())?;
    write!(text, "• Compliance: {}%", s.compliance.score())?;

    Ok(MazwiReply::with_blocks(
        text,
        vec![
            ContentBlock::chart(
                ChartKind::Bar,
                "Platform Overview",
                vec![
                    ChartDatum::colored("Risks", s.risks.total, RED),
                    ChartDatum::colored("Assets", s.assets.total, BLUE),
                    ChartDatum::colored("Incidents", s.incidents.total(), ORANGE),
                    ChartDatum::colored("Standards", s.compliance.total_standards(), GREEN),
                ],
            ),
            ContentBlock::navigation("Main Dashboard", "Everything at a glance", "/dashboard"),
        ],
    ))
}

const DASHBOARDS: &[(&str, &str, &str)] = &[
    ("Risk Dashboard", "Risk register and treatment plans", "/dashboard/risk"),
    ("Asset Dashboard", "Asset inventory and classification", "/dashboard/asset"),
    ("Incident Dashboard", "Incident tracking and response", "/dashboard/incident"),
    ("Audit Dashboard", "Audit plans and findings", "/dashboard/audit"),
    ("Compliance Dashboard", "Standards, controls and evidence", "/dashboard/compliance"),
    ("Governance Dashboard", "Policies and oversight", "/dashboard/governance"),
    ("Performance Dashboard", "KPIs and trends", "/dashboard/performance"),
    ("Data Explorer", "Query and export raw records", "/data-explorer"),
];

pub fn navigation(_ctx: &Context<'_>) -> Reply {
    Ok(MazwiReply::with_blocks(
        "Here are the ProSuite pages you can open:",
        DASHBOARDS
            .iter()
            .map(|(title, description, path)| ContentBlock::navigation(*title, *description, *path))
            .collect(),
    ))
}

// ── Conversation ────────────────────────────────────────────────────

pub fn greeting(ctx: &Context<'_>) -> Reply {
    Ok(MazwiReply::plain(greeting_text(ctx.assistant)))
}

pub fn thanks(_ctx: &Context<'_>) -> Reply {
    Ok(MazwiReply::plain(
        "You're welcome! Let me know if there's anything else I can help with.",
    ))
}

pub fn help(ctx: &Context<'_>) -> Reply {
    Ok(MazwiReply::plain(help_menu(ctx.assistant)))
}
