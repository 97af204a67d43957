//! CLI argument parsing and subcommand dispatch.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use prosuite_core::Config;
use prosuite_mazwi::{classify, LocationHint, WidgetEvent, WidgetNotification, WidgetState};
use prosuite_signals::{generate_alerts, generate_reminders, proactive_digest};

use crate::state::AppState;

/// ProSuite GRC assistant server.
///
/// Runs the HTTP API by default. The other subcommands answer from the same
/// built-in dataset without starting a listener.
#[derive(Parser, Debug)]
#[command(name = "prosuite-server", version, about = "ProSuite GRC assistant server")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve {
        /// Port override (otherwise PORT / {PROFILE}_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Ask Mazwi a question and print the reply
    Ask {
        message: String,
        /// City for weather questions
        #[arg(long, requires = "country")]
        city: Option<String>,
        /// Country for weather questions
        #[arg(long, requires = "city")]
        country: Option<String>,
    },
    /// Print which topic a message routes to
    Classify { message: String },
    /// Print the alerts raised by the built-in dataset
    Alerts,
    /// Print upcoming reminders
    Reminders,
    /// Print the current metrics snapshot
    Snapshot,
    /// Poll the proactive digest and print what the chat widget would show
    Watch {
        /// Seconds between polls
        #[arg(long, default_value = "30")]
        interval: u64,
        /// Stop after this many polls (runs until interrupted if unset)
        #[arg(long)]
        ticks: Option<u32>,
    },
}

/// Dispatch the parsed subcommand.
///
/// Returns `Ok(true)` if a subcommand was handled, `Ok(false)` if `serve`
/// should be started (handled by the caller).
pub async fn dispatch(config: &Config, args: &CliArgs) -> anyhow::Result<bool> {
    let state = AppState::new(config.clone());
    match &args.command {
        None | Some(Command::Serve { .. }) => Ok(false),
        Some(Command::Ask { message, city, country }) => {
            let location = match (city, country) {
                (Some(city), Some(country)) => Some(LocationHint {
                    city: city.clone(),
                    country: country.clone(),
                }),
                _ => None,
            };
            let reply = state
                .mazwi
                .route(message, &[], location.as_ref(), &state.snapshot())
                .await?;
            println!("{}", reply.text);
            for block in &reply.rich_content {
                println!("[{}] {}", block.kind(), serde_json::to_string(block)?);
            }
            Ok(true)
        }
        Some(Command::Classify { message }) => {
            match classify(message) {
                Some(topic) => println!("{topic}"),
                None => println!("fallback"),
            }
            Ok(true)
        }
        Some(Command::Alerts) => {
            let alerts = generate_alerts(&state.snapshot());
            println!("{}", serde_json::to_string_pretty(&alerts)?);
            Ok(true)
        }
        Some(Command::Reminders) => {
            let reminders = generate_reminders(&state.snapshot());
            println!("{}", serde_json::to_string_pretty(&reminders)?);
            Ok(true)
        }
        Some(Command::Snapshot) => {
            println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
            Ok(true)
        }
        Some(Command::Watch { interval, ticks }) => {
            watch(&state, Duration::from_secs((*interval).max(1)), *ticks).await;
            Ok(true)
        }
    }
}

/// Poll the digest on a fixed interval and feed it through the widget
/// reducer. Only actionable alerts and open reminders are pushed.
async fn watch(state: &AppState, every: Duration, ticks: Option<u32>) {
    let mut widget = WidgetState::default();
    let mut timer = tokio::time::interval(every);
    let mut polls = 0u32;

    loop {
        timer.tick().await;
        let now = chrono::Utc::now();
        let digest = proactive_digest(&state.snapshot());

        let arrivals = digest
            .actionable()
            .map(WidgetNotification::from)
            .chain(digest.reminders.iter().filter(|r| !r.completed).map(WidgetNotification::from))
            .collect::<Vec<_>>();

        let mut shown = Vec::new();
        for notification in arrivals {
            let (next, delivered) =
                widget.reduce(WidgetEvent::NotificationArrived { notification, at: now });
            widget = next;
            shown.extend(delivered);
        }
        let (next, delivered) = widget.reduce(WidgetEvent::Tick { now });
        widget = next;
        shown.extend(delivered);

        for n in &shown {
            println!("[{}] {}: {}", n.severity, n.title, n.message);
        }
        info!(
            shown = shown.len(),
            unread = widget.unread,
            queued = widget.queued(),
            "watch: poll complete"
        );

        polls += 1;
        if ticks.is_some_and(|limit| polls >= limit) {
            break;
        }
    }
}
