//! Two independent triggers driving the same watchlist scan

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use cron::Schedule;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::market_hours::MarketHours;
use crate::core::scanner::{ScanSummary, Scanner};
use crate::error::ConfigError;
use crate::services::notifier::ChatId;

#[derive(Debug, Clone)]
pub enum ScanTrigger {
    /// Fixed period, first tick after `first_after`
    Interval { every: Duration, first_after: Duration },
    /// Cron schedule evaluated in the market timezone
    Daily { schedule: Schedule },
}

impl ScanTrigger {
    pub fn interval(every: Duration, first_after: Duration) -> Self {
        ScanTrigger::Interval { every, first_after }
    }

    pub fn daily(expr: &str) -> Result<Self, ConfigError> {
        let schedule = Schedule::from_str(expr).map_err(|e| ConfigError::Invalid {
            key: "DAILY_SCAN_CRON",
            value: expr.to_string(),
            reason: e.to_string(),
        })?;
        Ok(ScanTrigger::Daily { schedule })
    }

    /// Time to wait from `now` until the next tick.
    pub fn next_delay(&self, now: &DateTime<FixedOffset>, first: bool) -> Option<Duration> {
        match self {
            ScanTrigger::Interval { every, first_after } => {
                Some(if first { *first_after } else { *every })
            }
            ScanTrigger::Daily { schedule } => {
                let next = schedule.after(now).next()?;
                Some((next - *now).to_std().unwrap_or_default())
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ScanTrigger::Interval { .. } => "interval",
            ScanTrigger::Daily { .. } => "daily",
        }
    }
}

/// Gate a scheduled scan on the destination chat and the session clock.
///
/// Returns `None` when the scan was skipped.
pub async fn run_scheduled_scan(
    scanner: &Scanner,
    chat: Option<&ChatId>,
    market_hours: &MarketHours,
    now: &DateTime<FixedOffset>,
) -> Option<ScanSummary> {
    let Some(chat) = chat else {
        warn!("Scheduler: TELEGRAM_CHAT_ID not set, skipping scheduled scan");
        return None;
    };
    if !market_hours.is_open(now) {
        debug!(now = %now, "Scheduler: market closed, skipping scheduled scan");
        return None;
    }

    info!(at = %now.format("%H:%M"), "Scheduler: scanning watchlist");
    Some(scanner.scan(chat).await)
}

pub struct ScanScheduler {
    scanner: Arc<Scanner>,
    chat: Option<ChatId>,
    market_hours: MarketHours,
    triggers: Vec<ScanTrigger>,
    handles: Arc<RwLock<Vec<JoinHandle<()>>>>,
}

impl ScanScheduler {
    pub fn new(
        scanner: Arc<Scanner>,
        chat: Option<ChatId>,
        market_hours: MarketHours,
        triggers: Vec<ScanTrigger>,
    ) -> Self {
        Self {
            scanner,
            chat,
            market_hours,
            triggers,
            handles: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Hourly interval trigger plus the daily session-open trigger.
    pub fn from_config(config: &Config, scanner: Arc<Scanner>) -> Result<Self, ConfigError> {
        let triggers = vec![
            ScanTrigger::interval(config.scan_interval, config.scan_first_delay),
            ScanTrigger::daily(&config.daily_scan_cron)?,
        ];
        Ok(Self::new(
            scanner,
            config.chat_id.clone(),
            config.market_hours,
            triggers,
        ))
    }

    /// Spawn one task per trigger.
    pub async fn start(&self) {
        let mut handles = self.handles.write().await;
        if !handles.is_empty() {
            warn!("Scheduler: already running");
            return;
        }

        for trigger in &self.triggers {
            let trigger = trigger.clone();
            let scanner = self.scanner.clone();
            let chat = self.chat.clone();
            let market_hours = self.market_hours;

            handles.push(tokio::spawn(async move {
                info!(trigger = trigger.name(), "Scheduler: trigger started");
                let mut first = true;
                loop {
                    let now = market_hours.now();
                    let Some(delay) = trigger.next_delay(&now, first) else {
                        warn!(trigger = trigger.name(), "Scheduler: schedule exhausted");
                        break;
                    };
                    first = false;
                    tokio::time::sleep(delay).await;

                    let now = market_hours.now();
                    run_scheduled_scan(&scanner, chat.as_ref(), &market_hours, &now).await;
                }
            }));
        }

        info!(triggers = handles.len(), "Scheduler: started");
    }

    pub async fn stop(&self) {
        let mut handles = self.handles.write().await;
        for handle in handles.drain(..) {
            handle.abort();
        }
        info!("Scheduler: stopped");
    }

    pub async fn is_running(&self) -> bool {
        !self.handles.read().await.is_empty()
    }
}
