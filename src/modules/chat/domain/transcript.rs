use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::domain::topic::{detect_topic, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry, including the widget-side decorations (reaction,
/// pinned) that survive persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub topic: Topic,
    #[serde(default)]
    pub reaction: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: ChatRole::User,
            content: content.to_string(),
            topic: detect_topic(content),
            reaction: None,
            pinned: false,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.to_string(),
            topic: Topic::General,
            reaction: None,
            pinned: false,
            timestamp: Utc::now(),
        }
    }
}

/// Seed message shown on first load and whenever stored state is unusable.
pub fn greeting() -> ChatMessage {
    ChatMessage::assistant(
        "Hi! I'm the portfolio assistant. Ask me about projects, services, \
         tech stack, or how to get in touch.",
    )
}
