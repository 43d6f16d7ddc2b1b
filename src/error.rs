//! Error taxonomy.
//!
//! Too little history is not an error: the engine reports it through
//! `LiveCheck::InsufficientData` / `BacktestOutcome::InsufficientData`.

use chrono::NaiveDate;
use thiserror::Error;

/// Malformed input handed to the indicator engine or rule evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("bars must be strictly ascending: {current} at index {index} follows {previous}")]
    NonMonotonic {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("non-finite {field} on {date} (index {index})")]
    NonFinite {
        index: usize,
        date: NaiveDate,
        field: &'static str,
    },

    #[error("cannot evaluate index {index} of {len} rows (minimum index {min})")]
    IndexOutOfRange { index: usize, len: usize, min: usize },
}

/// Market data fetch failures.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP response (status={status}) for {ticker}")]
    Status {
        ticker: String,
        status: reqwest::StatusCode,
    },

    #[error("provider rejected {ticker}: {description}")]
    Provider { ticker: String, description: String },

    #[error("failed to decode response for {ticker}: {error}")]
    Decode {
        ticker: String,
        error: serde_json::Error,
    },

    #[error("no price data returned for {0}")]
    NoData(String),

    #[error("invalid market data url: {0}")]
    Url(#[from] url::ParseError),
}

/// Chart rendering failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("cannot render an empty chart for {0}")]
    EmptySeries(String),

    #[error("chart for {0} contains non-finite values")]
    NonFinite(String),

    #[error("chart drawing failed: {0}")]
    Draw(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Notification transport failures.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("invalid Telegram API url: {0}")]
    Url(#[from] url::ParseError),
}

/// Startup configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
