//! Keyword intent routing for the Mazwi assistant.
//!
//! The lowercased message is checked against [`TOPIC_RULES`] in order. The
//! first rule with any keyword contained in the message answers; later rules
//! are never consulted, even if they would match more keywords. A message
//! matching nothing gets the help menu.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use prosuite_core::MetricsSnapshot;
use prosuite_signals::{NewsFeed, NewsItem, StaticNewsFeed};

use crate::content::ContentBlock;
use crate::error::MazwiError;
use crate::responses;

/// A prior chat turn. Accepted for interface compatibility; it never
/// influences which topic answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHint {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MazwiReply {
    pub text: String,
    pub rich_content: Vec<ContentBlock>,
}

impl MazwiReply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rich_content: Vec::new(),
        }
    }

    pub fn with_blocks(text: impl Into<String>, blocks: Vec<ContentBlock>) -> Self {
        Self {
            text: text.into(),
            rich_content: blocks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Risk,
    Asset,
    Incident,
    Compliance,
    Governance,
    Audit,
    Performance,
    Alerts,
    Reminders,
    News,
    Weather,
    Market,
    Licenses,
    Users,
    Modules,
    Activity,
    Overview,
    Navigation,
    Greeting,
    Thanks,
    Help,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Risk => "risk",
            Topic::Asset => "asset",
            Topic::Incident => "incident",
            Topic::Compliance => "compliance",
            Topic::Governance => "governance",
            Topic::Audit => "audit",
            Topic::Performance => "performance",
            Topic::Alerts => "alerts",
            Topic::Reminders => "reminders",
            Topic::News => "news",
            Topic::Weather => "weather",
            Topic::Market => "market",
            Topic::Licenses => "licenses",
            Topic::Users => "users",
            Topic::Modules => "modules",
            Topic::Activity => "activity",
            Topic::Overview => "overview",
            Topic::Navigation => "navigation",
            Topic::Greeting => "greeting",
            Topic::Thanks => "thanks",
            Topic::Help => "help",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a topic handler may read.
pub struct Context<'a> {
    pub snapshot: &'a MetricsSnapshot,
    pub location: Option<&'a LocationHint>,
    /// Populated only when the news topic answers.
    pub news: &'a [NewsItem],
    pub assistant: &'a str,
}

type Handler = fn(&Context<'_>) -> Result<MazwiReply, MazwiError>;

struct TopicRule {
    topic: Topic,
    keywords: &'static [&'static str],
    respond: Handler,
}

impl TopicRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Precedence is table order.
const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Risk,
        keywords: &["risk", "threat", "vulnerabilit"],
        respond: responses::risk,
    },
    TopicRule {
        topic: Topic::Asset,
        keywords: &["asset", "inventory", "hardware", "equipment"],
        respond: responses::asset,
    },
    TopicRule {
        topic: Topic::Incident,
        keywords: &["incident", "breach", "outage"],
        respond: responses::incident,
    },
    TopicRule {
        topic: Topic::Compliance,
        keywords: &["compliance", "compliant", "standard", "regulation", "regulatory"],
        respond: responses::compliance,
    },
    TopicRule {
        topic: Topic::Governance,
        keywords: &["governance", "policy", "policies", "board meeting", "board report"],
        respond: responses::governance,
    },
    TopicRule {
        topic: Topic::Audit,
        keywords: &["audit", "assurance", "finding"],
        respond: responses::audit,
    },
    TopicRule {
        topic: Topic::Performance,
        keywords: &["performance", "kpi", "metric", "efficiency"],
        respond: responses::performance,
    },
    TopicRule {
        topic: Topic::Alerts,
        keywords: &["alert", "warning", "urgent", "notification"],
        respond: responses::alerts,
    },
    TopicRule {
        topic: Topic::Reminders,
        keywords: &["remind", "deadline", "due date", "upcoming task", "to-do", "todo"],
        respond: responses::reminders,
    },
    TopicRule {
        topic: Topic::News,
        keywords: &["news", "headline", "industry update"],
        respond: responses::news,
    },
    TopicRule {
        topic: Topic::Weather,
        keywords: &["weather", "forecast", "temperature"],
        respond: responses::weather,
    },
    TopicRule {
        topic: Topic::Market,
        keywords: &["market", "stock", "share price", "exchange rate", "jse"],
        respond: responses::market,
    },
    TopicRule {
        topic: Topic::Licenses,
        keywords: &["license", "licence", "seat"],
        respond: responses::licenses,
    },
    TopicRule {
        topic: Topic::Users,
        keywords: &["user", "staff", "team member", "people"],
        respond: responses::users,
    },
    TopicRule {
        topic: Topic::Modules,
        keywords: &["module", "feature"],
        respond: responses::modules,
    },
    TopicRule {
        topic: Topic::Activity,
        keywords: &["activity", "recent", "latest", "what happened"],
        respond: responses::activity,
    },
    TopicRule {
        topic: Topic::Overview,
        keywords: &["overview", "summary", "dashboard", "status", "report"],
        respond: responses::overview,
    },
    TopicRule {
        topic: Topic::Navigation,
        keywords: &["navigate", "take me", "go to", "where can i", "explorer", "page"],
        respond: responses::navigation,
    },
    TopicRule {
        topic: Topic::Greeting,
        keywords: &[
            "hello",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
            "greetings",
            "sawubona",
        ],
        respond: responses::greeting,
    },
    TopicRule {
        topic: Topic::Thanks,
        keywords: &["thank", "appreciate", "cheers"],
        respond: responses::thanks,
    },
    TopicRule {
        topic: Topic::Help,
        keywords: &["help", "what can you do", "capabilities", "commands"],
        respond: responses::help,
    },
];

fn first_match(lowered: &str) -> Option<&'static TopicRule> {
    TOPIC_RULES.iter().find(|rule| rule.matches(lowered))
}

/// Topic that would answer `message`, or `None` for the help-menu fallback.
pub fn classify(message: &str) -> Option<Topic> {
    first_match(&message.to_lowercase()).map(|rule| rule.topic)
}

/// Stateless intent router. Cheap to clone and share across requests.
#[derive(Clone)]
pub struct Mazwi {
    assistant: String,
    news: Arc<dyn NewsFeed>,
}

impl Mazwi {
    pub fn new(assistant: impl Into<String>, news: Arc<dyn NewsFeed>) -> Self {
        Self {
            assistant: assistant.into(),
            news,
        }
    }

    pub fn from_config(config: &prosuite_core::config::MazwiConfig) -> Self {
        let feed = StaticNewsFeed::new(std::time::Duration::from_millis(config.news_latency_ms));
        Self::new(config.assistant_name.clone(), Arc::new(feed))
    }

    pub fn assistant(&self) -> &str {
        &self.assistant
    }

    /// Feed the news topic reads from.
    pub fn news_feed(&self) -> &dyn NewsFeed {
        self.news.as_ref()
    }

    /// Answer `message` from `snapshot`.
    ///
    /// `history` is logged by length only. `location` is read by the weather
    /// topic alone.
    pub async fn route(
        &self,
        message: &str,
        history: &[ChatMessage],
        location: Option<&LocationHint>,
        snapshot: &MetricsSnapshot,
    ) -> Result<MazwiReply, MazwiError> {
        debug!(history_len = history.len(), "mazwi request");

        let lowered = message.to_lowercase();
        let Some(rule) = first_match(&lowered) else {
            info!(topic = "fallback", "mazwi routed message");
            return Ok(MazwiReply::plain(responses::help_menu(&self.assistant)));
        };
        info!(topic = %rule.topic, "mazwi routed message");

        let news = if rule.topic == Topic::News {
            self.news.fetch().await
        } else {
            Vec::new()
        };

        let ctx = Context {
            snapshot,
            location,
            news: &news,
            assistant: &self.assistant,
        };
        (rule.respond)(&ctx)
    }
}

impl Default for Mazwi {
    fn default() -> Self {
        Self::from_config(&prosuite_core::config::MazwiConfig::default())
    }
}
