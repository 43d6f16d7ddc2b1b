//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::PriceBar;

pub const EMA_FAST: usize = 9;
pub const EMA_MEDIUM: usize = 20;
pub const EMA_SLOW: usize = 21;
pub const EMA_LONG: usize = 50;

/// EMA of close for every bar.
///
/// Seeded with the first close, so the output is defined from index 0
/// and has the same length as `bars`.
pub fn calculate_ema_series(bars: &[PriceBar], period: usize) -> Vec<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::ema_series(&closes, period)
}

