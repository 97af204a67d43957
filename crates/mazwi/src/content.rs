//! Rich content blocks attached to Mazwi replies.
//!
//! Wire shape is `{"type": "<kind>", "data": {...}}`; the dashboard's
//! renderer maps each kind to a widget.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ContentBlock {
    Text(TextBlock),
    Chart(ChartSpec),
    Link(LinkBlock),
    Navigation(NavigationBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart_type: ChartKind,
    pub title: String,
    pub data: Vec<ChartDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBlock {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationBlock {
    pub title: String,
    pub description: String,
    pub path: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text(TextBlock { text: text.into() })
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        ContentBlock::Link(LinkBlock {
            text: text.into(),
            url: url.into(),
        })
    }

    pub fn navigation(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        ContentBlock::Navigation(NavigationBlock {
            title: title.into(),
            description: description.into(),
            path: path.into(),
        })
    }

    pub fn chart(kind: ChartKind, title: impl Into<String>, data: Vec<ChartDatum>) -> Self {
        ContentBlock::Chart(ChartSpec {
            chart_type: kind,
            title: title.into(),
            data,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Text(_) => "text",
            ContentBlock::Chart(_) => "chart",
            ContentBlock::Link(_) => "link",
            ContentBlock::Navigation(_) => "navigation",
        }
    }
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
        }
    }

    pub fn colored(name: impl Into<String>, value: u32, color: &str) -> Self {
        Self {
            name: name.into(),
            value,
            color: Some(color.to_string()),
        }
    }
}
