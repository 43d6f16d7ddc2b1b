//! Market data provider interface.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Duration;

use crate::error::MarketDataError;
use crate::models::indicators::PriceBar;

/// Calendar-day window ending at the most recent bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookback {
    pub days: u32,
}

impl Lookback {
    pub fn days(days: u32) -> Self {
        Self { days }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars for `ticker`, ascending by date with no duplicates.
    async fn get_daily_bars(
        &self,
        ticker: &str,
        lookback: Lookback,
    ) -> Result<Vec<PriceBar>, MarketDataError>;
}

/// Serves fixed series from memory; offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    series: HashMap<String, Vec<PriceBar>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, ticker: &str, bars: Vec<PriceBar>) -> Self {
        self.series.insert(ticker.to_string(), bars);
        self
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_daily_bars(
        &self,
        ticker: &str,
        lookback: Lookback,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        let bars = self
            .series
            .get(ticker)
            .ok_or_else(|| MarketDataError::Provider {
                ticker: ticker.to_string(),
                description: "unknown ticker".to_string(),
            })?;

        let Some(last) = bars.last() else {
            return Err(MarketDataError::NoData(ticker.to_string()));
        };
        let cutoff = last.date - Duration::days(i64::from(lookback.days));

        Ok(bars.iter().filter(|b| b.date > cutoff).copied().collect())
    }
}
