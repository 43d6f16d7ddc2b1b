//! Notification delivery interface.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, DeliveryError};
use crate::services::chart::RenderedChart;

/// Destination chat: a numeric id or an `@channel` username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for ChatId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Ok(ChatId::Id(id));
        }
        if s.len() > 1 && s.starts_with('@') {
            return Ok(ChatId::Username(s.to_string()));
        }
        Err(ConfigError::Invalid {
            key: "TELEGRAM_CHAT_ID",
            value: s.to_string(),
            reason: "expected a numeric chat id or an @channel name".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Plain,
    Markdown,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(
        &self,
        chat: &ChatId,
        text: &str,
        mode: ParseMode,
    ) -> Result<(), DeliveryError>;

    /// Send a chart with a Markdown caption.
    async fn send_chart(
        &self,
        chat: &ChatId,
        chart: &RenderedChart,
        caption: &str,
    ) -> Result<(), DeliveryError>;
}
