//! Mazwi, the ProSuite GRC chat assistant.
//!
//! This crate provides:
//! - Keyword intent routing with first-match-wins precedence
//! - Reply builders that render snapshot figures into text and rich content
//! - Typed rich content blocks (text, chart, link, navigation)
//! - The chat widget state reducer used for proactive notifications

pub mod content;
pub mod error;
pub mod responses;
pub mod router;
pub mod widget;

pub use content::{ChartDatum, ChartKind, ContentBlock};
pub use error::MazwiError;
pub use router::{classify, ChatMessage, LocationHint, Mazwi, MazwiReply, Topic};
pub use widget::{WidgetEvent, WidgetNotification, WidgetState};
