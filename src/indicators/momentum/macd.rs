//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdValues;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Calculate the MACD triple for every close.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd_series(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Vec<MacdValues> {
    let fast = math::ema_series(closes, fast_period);
    let slow = math::ema_series(closes, slow_period);

    let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = math::ema_series(&line, signal_period);

    line.into_iter()
        .zip(signal)
        .map(|(line, signal)| MacdValues {
            line,
            signal,
            histogram: line - signal,
        })
        .collect()
}

/// MACD with the default 12/26/9 periods
pub fn calculate_macd_default(closes: &[f64]) -> Vec<MacdValues> {
    calculate_macd_series(closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}
