use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarColor {
    Green,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub close: f64,
    pub ema_9: f64,
    pub ema_50: f64,
    pub histogram: f64,
}

impl ChartPoint {
    /// Green for a non-negative histogram, red below zero
    pub fn histogram_color(&self) -> BarColor {
        if self.histogram >= 0.0 {
            BarColor::Green
        } else {
            BarColor::Red
        }
    }
}

/// Data for the signal chart: close, EMA-9 and EMA-50 overlay plus the
/// MACD histogram over the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub ticker: String,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    /// Take the last `window` rows (all of them if there are fewer).
    pub fn from_rows(ticker: &str, rows: &[IndicatorRow], window: usize) -> Self {
        let start = rows.len().saturating_sub(window);
        let points = rows[start..]
            .iter()
            .map(|row| ChartPoint {
                date: row.date(),
                close: row.close(),
                ema_9: row.ema_9,
                ema_50: row.ema_50,
                histogram: row.macd.histogram,
            })
            .collect();

        Self {
            ticker: ticker.to_string(),
            points,
        }
    }
}
