//! Per-ticker pipeline: fetch, evaluate, compose, deliver.
//!
//! Every fetch or evaluation failure is captured per ticker so a batch
//! scan always runs to the end of the watchlist.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::DeliveryError;
use crate::models::signal::{LiveCheck, SignalAlert};
use crate::services::chart::{ChartRenderer, RenderedChart};
use crate::services::market_data::{Lookback, MarketDataProvider};
use crate::services::notifier::{ChatId, Notifier, ParseMode};
use crate::signals::engine::SignalEngine;
use crate::signals::message;

/// Result of the live pipeline for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub enum TickerOutcome {
    Signal(SignalAlert),
    NoSignal,
    InsufficientData { bars: usize, required: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub scanned: usize,
    pub signals: usize,
    pub insufficient: usize,
    pub failed: usize,
    pub delivery_failures: usize,
}

/// A message ready for the notifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text { text: String, mode: ParseMode },
    Chart { chart: RenderedChart, caption: String },
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Reply::Text {
            text: text.into(),
            mode: ParseMode::Plain,
        }
    }
}

pub struct Scanner {
    provider: Arc<dyn MarketDataProvider>,
    notifier: Arc<dyn Notifier>,
    renderer: Arc<dyn ChartRenderer>,
    watchlist: Vec<String>,
    live_lookback: Lookback,
    pacing: Duration,
}

impl Scanner {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        notifier: Arc<dyn Notifier>,
        renderer: Arc<dyn ChartRenderer>,
        config: &Config,
    ) -> Self {
        Self {
            provider,
            notifier,
            renderer,
            watchlist: config.watchlist.clone(),
            live_lookback: Lookback::days(config.live_lookback_days),
            pacing: config.notify_pacing,
        }
    }

    pub fn watchlist(&self) -> &[String] {
        &self.watchlist
    }

    /// Fetch the live window and evaluate the rule at its last bar.
    pub async fn check_ticker(&self, ticker: &str) -> TickerOutcome {
        let bars = match self.provider.get_daily_bars(ticker, self.live_lookback).await {
            Ok(bars) => bars,
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "Scanner: fetch failed for {}", ticker);
                return TickerOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        match SignalEngine::check_latest(ticker, &bars) {
            Ok(LiveCheck::Signal(alert)) => {
                info!(ticker = %ticker, date = %alert.date, close = alert.close, "Scanner: signal for {}", ticker);
                TickerOutcome::Signal(alert)
            }
            Ok(LiveCheck::NoSignal(evaluation)) => {
                debug!(ticker = %ticker, failed = ?evaluation.failed(), "Scanner: no signal for {}", ticker);
                TickerOutcome::NoSignal
            }
            Ok(LiveCheck::InsufficientData { bars, required }) => {
                info!(ticker = %ticker, bars, required, "Scanner: insufficient data for {}", ticker);
                TickerOutcome::InsufficientData { bars, required }
            }
            Err(e) => {
                error!(ticker = %ticker, error = %e, "Scanner: evaluation failed for {}", ticker);
                TickerOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Chart plus caption; falls back to the caption alone when the
    /// chart cannot be rendered.
    pub fn alert_reply(&self, alert: &SignalAlert) -> Reply {
        let caption = message::alert_caption(alert);
        match self.renderer.render(&alert.chart) {
            Ok(chart) => Reply::Chart { chart, caption },
            Err(e) => {
                warn!(ticker = %alert.ticker, error = %e, "Scanner: chart rendering failed, sending text only");
                Reply::Text {
                    text: caption,
                    mode: ParseMode::Markdown,
                }
            }
        }
    }

    /// User reply for an on-demand check.
    pub fn reply_for_check(&self, ticker: &str, outcome: &TickerOutcome) -> Reply {
        match outcome {
            TickerOutcome::Signal(alert) => self.alert_reply(alert),
            TickerOutcome::NoSignal => Reply::plain(message::no_signal_text(ticker)),
            TickerOutcome::InsufficientData { .. } => Reply::plain(message::INSUFFICIENT_DATA),
            TickerOutcome::Failed { reason } => {
                Reply::plain(message::check_error_text(ticker, reason))
            }
        }
    }

    pub async fn deliver(&self, chat: &ChatId, reply: &Reply) -> Result<(), DeliveryError> {
        match reply {
            Reply::Text { text, mode } => self.notifier.send_message(chat, text, *mode).await,
            Reply::Chart { chart, caption } => self.notifier.send_chart(chat, chart, caption).await,
        }
    }

    /// Check one ticker and reply to `chat`.
    pub async fn check_and_reply(&self, chat: &ChatId, ticker: &str) -> Result<TickerOutcome, DeliveryError> {
        let outcome = self.check_ticker(ticker).await;
        let reply = self.reply_for_check(ticker, &outcome);
        self.deliver(chat, &reply).await?;
        Ok(outcome)
    }

    /// Scan the watchlist in order and deliver every signal to `chat`.
    ///
    /// Owns no state, so overlapping or back-to-back scans are safe.
    pub async fn scan(&self, chat: &ChatId) -> ScanSummary {
        info!(tickers = self.watchlist.len(), "Scanner: scanning watchlist");
        let mut summary = ScanSummary::default();

        for ticker in &self.watchlist {
            summary.scanned += 1;
            match self.check_ticker(ticker).await {
                TickerOutcome::Signal(alert) => {
                    summary.signals += 1;
                    let reply = self.alert_reply(&alert);
                    if let Err(e) = self.deliver(chat, &reply).await {
                        summary.delivery_failures += 1;
                        error!(ticker = %ticker, error = %e, "Scanner: failed to deliver signal for {}", ticker);
                    }
                    tokio::time::sleep(self.pacing).await;
                }
                TickerOutcome::NoSignal => {}
                TickerOutcome::InsufficientData { .. } => summary.insufficient += 1,
                TickerOutcome::Failed { .. } => summary.failed += 1,
            }
        }

        if summary.signals == 0 {
            if let Err(e) = self
                .notifier
                .send_message(chat, message::NO_SIGNALS_TODAY, ParseMode::Plain)
                .await
            {
                summary.delivery_failures += 1;
                error!(error = %e, "Scanner: failed to deliver scan summary");
            }
        }

        info!(
            scanned = summary.scanned,
            signals = summary.signals,
            insufficient = summary.insufficient,
            failed = summary.failed,
            "Scanner: scan complete"
        );
        summary
    }

    /// Run a backtest and return the text report; failures become text.
    pub async fn backtest(&self, ticker: &str, days: u32) -> String {
        let bars = match self.provider.get_daily_bars(ticker, Lookback::days(days)).await {
            Ok(bars) => bars,
            Err(e) => {
                error!(ticker = %ticker, error = %e, "Scanner: backtest fetch failed for {}", ticker);
                return message::backtest_error_text(ticker, &e.to_string());
            }
        };

        match SignalEngine::backtest(ticker, &bars, days) {
            Ok(outcome) => message::backtest_summary(ticker, &outcome),
            Err(e) => {
                error!(ticker = %ticker, error = %e, "Scanner: backtest failed for {}", ticker);
                message::backtest_error_text(ticker, &e.to_string())
            }
        }
    }
}
