//! External GRC news feed.
//!
//! There is no real upstream: [`StaticNewsFeed`] serves a fixed list after a
//! simulated latency and never fails. The [`NewsFeed`] trait is the seam a
//! live provider would plug into.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
}

/// Source of industry news for the assistant.
#[async_trait::async_trait]
pub trait NewsFeed: Send + Sync {
    async fn fetch(&self) -> Vec<NewsItem>;

    /// Human-readable name for this feed.
    fn feed_name(&self) -> &str;
}

/// Compiled-in headlines returned after `latency`.
#[derive(Debug, Clone)]
pub struct StaticNewsFeed {
    latency: Duration,
}

impl StaticNewsFeed {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StaticNewsFeed {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[async_trait::async_trait]
impl NewsFeed for StaticNewsFeed {
    async fn fetch(&self) -> Vec<NewsItem> {
        fetch_external_news_with(self.latency).await
    }

    fn feed_name(&self) -> &str {
        "static"
    }
}

/// Fetch the headlines with the default simulated latency.
pub async fn fetch_external_news() -> Vec<NewsItem> {
    StaticNewsFeed::default().fetch().await
}

pub async fn fetch_external_news_with(latency: Duration) -> Vec<NewsItem> {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    let items = headlines();
    tracing::debug!(count = items.len(), latency_ms = latency.as_millis() as u64, "news fetched");
    items
}

struct Headline {
    title: &'static str,
    summary: &'static str,
    source: &'static str,
    url: &'static str,
    category: &'static str,
    published: (i32, u32, u32),
}

const HEADLINES: &[Headline] = &[
    Headline {
        title: "Information Regulator issues new POPIA enforcement guidance",
        summary: "Responsible parties must now report security compromises within 72 hours of discovery.",
        source: "Information Regulator",
        url: "https://inforegulator.org.za/news",
        category: "Regulation",
        published: (2026, 10, 14),
    },
    Headline {
        title: "PCI DSS v4.0 future-dated requirements now mandatory",
        summary: "Merchants must have targeted risk analyses and authenticated scanning in place.",
        source: "PCI Security Standards Council",
        url: "https://www.pcisecuritystandards.org/news",
        category: "Compliance",
        published: (2026, 10, 9),
    },
    Headline {
        title: "Ransomware attacks on mid-sized firms rose 30% this quarter",
        summary: "Attackers increasingly target backup infrastructure before encrypting production data.",
        source: "CSIRT Weekly",
        url: "https://www.cisa.gov/news-events",
        category: "Cybersecurity",
        published: (2026, 10, 6),
    },
    Headline {
        title: "King V consultation draft published for comment",
        summary: "The draft strengthens board oversight of technology and information governance.",
        source: "IoDSA",
        url: "https://www.iodsa.co.za",
        category: "Governance",
        published: (2026, 9, 29),
    },
];

fn headlines() -> Vec<NewsItem> {
    HEADLINES
        .iter()
        .map(|h| {
            let (y, m, d) = h.published;
            NewsItem {
                id: Uuid::new_v4(),
                title: h.title.to_string(),
                summary: h.summary.to_string(),
                source: h.source.to_string(),
                url: h.url.to_string(),
                category: h.category.to_string(),
                published_at: Utc
                    .with_ymd_and_hms(y, m, d, 8, 0, 0)
                    .single()
                    .unwrap_or_default(),
            }
        })
        .collect()
}
