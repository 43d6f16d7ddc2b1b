//! The five-condition breakout rule.

use crate::common::math;
use crate::error::EngineError;
use crate::models::indicators::IndicatorRow;
use crate::models::signal::RuleEvaluation;

pub const RSI_LOWER: f64 = 40.0;
pub const RSI_UPPER: f64 = 70.0;

/// Bars in the trailing volume average
pub const VOLUME_LOOKBACK: usize = 4;

/// Smallest index the rule can look back from: the volume window is
/// `index - 5 .. index - 1`.
pub const MIN_EVAL_INDEX: usize = VOLUME_LOOKBACK + 1;

/// Close crossed from at-or-below the 50-EMA to above it on this bar.
pub fn breakout(latest: &IndicatorRow, previous: &IndicatorRow) -> bool {
    latest.close() > latest.ema_50 && previous.close() <= previous.ema_50
}

/// The 50-EMA is above both the 9-EMA and the 21-EMA.
pub fn trend_filter(latest: &IndicatorRow) -> bool {
    latest.ema_50 > latest.ema_9 && latest.ema_50 > latest.ema_21
}

/// RSI within [40, 70] and above its own 20-EMA. Undefined RSI fails.
pub fn momentum_band(latest: &IndicatorRow) -> bool {
    match (latest.rsi, latest.rsi_ema) {
        (Some(rsi), Some(rsi_ema)) => (RSI_LOWER..=RSI_UPPER).contains(&rsi) && rsi > rsi_ema,
        _ => false,
    }
}

pub fn macd_confirmation(latest: &IndicatorRow) -> bool {
    latest.macd.histogram > 0.0
}

/// Mean volume of `rows[index - 5 .. index - 1]`.
///
/// The window skips both the current bar and its predecessor.
pub fn trailing_volume_mean(rows: &[IndicatorRow], index: usize) -> Option<f64> {
    if index < MIN_EVAL_INDEX || index >= rows.len() {
        return None;
    }
    let volumes: Vec<f64> = rows[index - MIN_EVAL_INDEX..index - 1]
        .iter()
        .map(|r| r.volume())
        .collect();
    math::mean(&volumes)
}

/// Evaluate every condition at `index` against its predecessor.
pub fn evaluate(rows: &[IndicatorRow], index: usize) -> Result<RuleEvaluation, EngineError> {
    let avg_volume = trailing_volume_mean(rows, index).ok_or(EngineError::IndexOutOfRange {
        index,
        len: rows.len(),
        min: MIN_EVAL_INDEX,
    })?;

    let latest = &rows[index];
    let previous = &rows[index - 1];

    Ok(RuleEvaluation {
        index,
        date: latest.date(),
        breakout: breakout(latest, previous),
        trend_filter: trend_filter(latest),
        momentum_band: momentum_band(latest),
        macd_confirmation: macd_confirmation(latest),
        volume_confirmation: latest.volume() > avg_volume,
    })
}
