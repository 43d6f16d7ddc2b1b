//! Runtime configuration, read once at startup.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use chrono::{FixedOffset, NaiveTime};

use crate::core::market_hours::MarketHours;
use crate::error::ConfigError;
use crate::models::ticker::normalize_ticker;
use crate::services::notifier::ChatId;
use crate::services::{telegram, yahoo};

pub const DEFAULT_WATCHLIST: &[&str] = &[
    "RELIANCE.NS",
    "TATASTEEL.NS",
    "HDFCBANK.NS",
    "INFY.NS",
    "TCS.NS",
    "ICICIBANK.NS",
    "KOTAKBANK.NS",
    "HINDUNILVR.NS",
    "ITC.NS",
    "SBIN.NS",
];

pub const DEFAULT_EXCHANGE_SUFFIX: &str = ".NS";
pub const DEFAULT_DAILY_SCAN_CRON: &str = "0 15 9 * * Mon-Fri";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: Option<String>,
    /// Destination for scheduled scans; scans are skipped without it
    pub chat_id: Option<ChatId>,
    pub watchlist: Vec<String>,
    pub exchange_suffix: String,
    pub scan_interval: Duration,
    pub scan_first_delay: Duration,
    pub daily_scan_cron: String,
    pub notify_pacing: Duration,
    pub backtest_days: u32,
    pub live_lookback_days: u32,
    pub yahoo_base_url: String,
    pub telegram_api_url: String,
    pub http_timeout: Duration,
    pub market_hours: MarketHours,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram_token: None,
            chat_id: None,
            watchlist: DEFAULT_WATCHLIST.iter().map(|t| t.to_string()).collect(),
            exchange_suffix: DEFAULT_EXCHANGE_SUFFIX.to_string(),
            scan_interval: Duration::from_secs(3600),
            scan_first_delay: Duration::from_secs(10),
            daily_scan_cron: DEFAULT_DAILY_SCAN_CRON.to_string(),
            notify_pacing: Duration::from_millis(1000),
            backtest_days: 700,
            live_lookback_days: 60,
            yahoo_base_url: yahoo::DEFAULT_BASE_URL.to_string(),
            telegram_api_url: telegram::DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(30),
            market_hours: MarketHours::default(),
        }
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_time(key: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        config.telegram_token = get("TELEGRAM_BOT_TOKEN").map(|t| t.trim().to_string());
        if let Some(chat) = get("TELEGRAM_CHAT_ID") {
            config.chat_id = Some(chat.parse()?);
        }
        if let Some(suffix) = get("DEFAULT_EXCHANGE_SUFFIX") {
            config.exchange_suffix = suffix.trim().to_string();
        }
        if let Some(list) = get("WATCHLIST") {
            config.watchlist = list
                .split(',')
                .filter_map(|t| normalize_ticker(t, &config.exchange_suffix))
                .collect();
            if config.watchlist.is_empty() {
                return Err(ConfigError::Invalid {
                    key: "WATCHLIST",
                    value: list,
                    reason: "no tickers listed".to_string(),
                });
            }
        }
        if let Some(v) = get("SCAN_INTERVAL_SECONDS") {
            let secs: u64 = parse_value("SCAN_INTERVAL_SECONDS", &v)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    key: "SCAN_INTERVAL_SECONDS",
                    value: v,
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.scan_interval = Duration::from_secs(secs);
        }
        if let Some(v) = get("SCAN_FIRST_DELAY_SECONDS") {
            config.scan_first_delay = Duration::from_secs(parse_value("SCAN_FIRST_DELAY_SECONDS", &v)?);
        }
        if let Some(v) = get("DAILY_SCAN_CRON") {
            cron::Schedule::from_str(v.trim()).map_err(|e| ConfigError::Invalid {
                key: "DAILY_SCAN_CRON",
                value: v.clone(),
                reason: e.to_string(),
            })?;
            config.daily_scan_cron = v.trim().to_string();
        }
        if let Some(v) = get("NOTIFY_PACING_MS") {
            config.notify_pacing = Duration::from_millis(parse_value("NOTIFY_PACING_MS", &v)?);
        }
        if let Some(v) = get("BACKTEST_DAYS") {
            config.backtest_days = parse_value("BACKTEST_DAYS", &v)?;
        }
        if let Some(v) = get("LIVE_LOOKBACK_DAYS") {
            config.live_lookback_days = parse_value("LIVE_LOOKBACK_DAYS", &v)?;
        }
        if let Some(v) = get("YAHOO_BASE_URL") {
            config.yahoo_base_url = v.trim().to_string();
        }
        if let Some(v) = get("TELEGRAM_API_URL") {
            config.telegram_api_url = v.trim().to_string();
        }
        if let Some(v) = get("HTTP_TIMEOUT_SECONDS") {
            config.http_timeout = Duration::from_secs(parse_value("HTTP_TIMEOUT_SECONDS", &v)?);
        }
        if let Some(v) = get("MARKET_UTC_OFFSET_MINUTES") {
            let minutes: i32 = parse_value("MARKET_UTC_OFFSET_MINUTES", &v)?;
            config.market_hours.offset = minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "MARKET_UTC_OFFSET_MINUTES",
                    value: v.clone(),
                    reason: "offset out of range".to_string(),
                })?;
        }
        if let Some(v) = get("MARKET_OPEN") {
            config.market_hours.open = parse_time("MARKET_OPEN", &v)?;
        }
        if let Some(v) = get("MARKET_CLOSE") {
            config.market_hours.close = parse_time("MARKET_CLOSE", &v)?;
        }

        Ok(config)
    }

    pub fn require_telegram_token(&self) -> Result<&str, ConfigError> {
        self.telegram_token
            .as_deref()
            .ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))
    }
}

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
