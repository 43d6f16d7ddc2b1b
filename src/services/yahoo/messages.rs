//! Yahoo Finance v8 chart response types

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::models::indicators::PriceBar;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange offset from UTC in seconds
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Convert to bars keyed by exchange-local date.
    ///
    /// Rows with any missing field are holiday placeholders and are
    /// dropped. When two rows land on the same date the later one wins.
    pub fn into_bars(self) -> Vec<PriceBar> {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };
        let offset = self.meta.gmtoffset;
        let mut by_date: BTreeMap<NaiveDate, PriceBar> = BTreeMap::new();

        for (i, ts) in self.timestamp.iter().enumerate() {
            let field = |values: &[Option<f64>]| values.get(i).copied().flatten();
            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
                field(&quote.open),
                field(&quote.high),
                field(&quote.low),
                field(&quote.close),
                field(&quote.volume),
            ) else {
                continue;
            };
            let Some(local) = DateTime::from_timestamp(ts + offset, 0) else {
                continue;
            };

            let date = local.date_naive();
            by_date.insert(date, PriceBar::new(date, open, high, low, close, volume));
        }

        by_date.into_values().collect()
    }
}
