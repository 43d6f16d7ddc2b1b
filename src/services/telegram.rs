//! Telegram delivery on top of `teloxide::Bot`

use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode as TelegramParseMode, Recipient};
use tracing::debug;
use url::Url;

use crate::error::DeliveryError;
use crate::services::chart::RenderedChart;
use crate::services::notifier::{ChatId, Notifier, ParseMode};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Bot bound to `api_url` with its own HTTP timeout.
///
/// The timeout has to outlast the dispatcher's long-poll wait.
pub fn build_bot(api_url: &str, token: &str, timeout: Duration) -> Result<Bot, DeliveryError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Bot::with_client(token, client).set_api_url(Url::parse(api_url)?))
}

impl From<&ChatId> for Recipient {
    fn from(chat: &ChatId) -> Self {
        match chat {
            ChatId::Id(id) => Recipient::Id(teloxide::types::ChatId(*id)),
            ChatId::Username(name) => Recipient::ChannelUsername(name.clone()),
        }
    }
}

impl From<teloxide::types::ChatId> for ChatId {
    fn from(chat: teloxide::types::ChatId) -> Self {
        ChatId::Id(chat.0)
    }
}

#[async_trait]
impl Notifier for Bot {
    async fn send_message(
        &self,
        chat: &ChatId,
        text: &str,
        mode: ParseMode,
    ) -> Result<(), DeliveryError> {
        let request = Requester::send_message(self, Recipient::from(chat), text);
        match mode {
            ParseMode::Plain => request.await?,
            ParseMode::Markdown => request.parse_mode(TelegramParseMode::Markdown).await?,
        };
        debug!(chat = %chat, "Telegram: message delivered");
        Ok(())
    }

    async fn send_chart(
        &self,
        chat: &ChatId,
        chart: &RenderedChart,
        caption: &str,
    ) -> Result<(), DeliveryError> {
        let photo = InputFile::memory(chart.bytes.clone()).file_name(chart.file_name.clone());
        self.send_photo(Recipient::from(chat), photo)
            .caption(caption)
            .parse_mode(TelegramParseMode::Markdown)
            .await?;
        debug!(chat = %chat, file = %chart.file_name, "Telegram: chart delivered");
        Ok(())
    }
}
