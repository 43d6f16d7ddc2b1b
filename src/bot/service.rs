//! Command dispatch over the teloxide dispatcher

use std::sync::Arc;

use teloxide::dispatching::{HandlerExt, UpdateFilterExt};
use teloxide::prelude::*;
use tracing::{debug, error, info};

use crate::bot::commands::{Command, HELP_TEXT};
use crate::config::Config;
use crate::core::scanner::{Reply, Scanner};
use crate::error::DeliveryError;
use crate::models::ticker::normalize_ticker;
use crate::services::notifier::{ChatId, ParseMode};

pub struct BotService {
    scanner: Arc<Scanner>,
    exchange_suffix: String,
    backtest_days: u32,
}

async fn answer(msg: Message, command: Command, service: Arc<BotService>) -> Result<(), DeliveryError> {
    service.handle(&ChatId::from(msg.chat.id), command).await;
    Ok(())
}

impl BotService {
    pub fn new(scanner: Arc<Scanner>, config: &Config) -> Self {
        Self {
            scanner,
            exchange_suffix: config.exchange_suffix.clone(),
            backtest_days: config.backtest_days,
        }
    }

    /// Long-poll `bot` and answer commands until Ctrl-C.
    pub async fn run(self: Arc<Self>, bot: Bot) {
        info!("BotService: polling for commands");
        let handler = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(answer);

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![self])
            .default_handler(|update| async move {
                debug!(update = ?update.id, "BotService: ignoring non-command update");
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }

    /// Run one command and report any delivery failure back to the chat.
    pub async fn handle(&self, chat: &ChatId, command: Command) {
        info!(chat = %chat, command = ?command, "BotService: received command");

        if let Err(e) = self.handle_command(chat, command).await {
            error!(chat = %chat, error = %e, "BotService: command failed");
            let reply = Reply::plain(format!("⚠️ Error: {}", e));
            if let Err(e) = self.scanner.deliver(chat, &reply).await {
                error!(chat = %chat, error = %e, "BotService: failed to report error");
            }
        }
    }

    fn ticker(&self, raw: Option<String>) -> Option<String> {
        raw.and_then(|raw| normalize_ticker(&raw, &self.exchange_suffix))
    }

    /// Answer `command` in `chat`.
    ///
    /// `/scan` here is the on-demand scan: it ignores market hours and
    /// sends its results to the chat that asked, not to `TELEGRAM_CHAT_ID`.
    /// Only the scheduler applies the market-hours gate.
    pub async fn handle_command(&self, chat: &ChatId, command: Command) -> Result<(), DeliveryError> {
        match command {
            Command::Start | Command::Help => {
                let reply = Reply::Text {
                    text: HELP_TEXT.to_string(),
                    mode: ParseMode::Markdown,
                };
                self.scanner.deliver(chat, &reply).await
            }
            Command::Check(raw) => match self.ticker(raw) {
                Some(ticker) => self.scanner.check_and_reply(chat, &ticker).await.map(|_| ()),
                None => {
                    let usage = Command::Check(None).usage();
                    self.scanner.deliver(chat, &Reply::plain(usage)).await
                }
            },
            Command::Backtest(raw) => match self.ticker(raw) {
                Some(ticker) => {
                    let report = self.scanner.backtest(&ticker, self.backtest_days).await;
                    self.scanner.deliver(chat, &Reply::plain(report)).await
                }
                None => {
                    let usage = Command::Backtest(None).usage();
                    self.scanner.deliver(chat, &Reply::plain(usage)).await
                }
            },
            Command::Scan => {
                let ack = format!(
                    "⏳ Scanning watchlist ({} tickers)...",
                    self.scanner.watchlist().len()
                );
                self.scanner.deliver(chat, &Reply::plain(ack)).await?;
                self.scanner.scan(chat).await;
                Ok(())
            }
        }
    }
}
