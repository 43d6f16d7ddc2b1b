//! Builds indicator rows from a raw bar series.

use crate::error::EngineError;
use crate::indicators::momentum::{
    calculate_macd_default, calculate_rsi_ema_series, calculate_rsi_series, RSI_EMA_PERIOD,
    RSI_PERIOD,
};
use crate::indicators::trend::{
    calculate_ema_series, EMA_FAST, EMA_LONG, EMA_MEDIUM, EMA_SLOW,
};
use crate::models::indicators::{IndicatorRow, PriceBar};

/// Reject series the indicators would silently get wrong.
pub fn validate_series(bars: &[PriceBar]) -> Result<(), EngineError> {
    for (index, bar) in bars.iter().enumerate() {
        let fields = [
            ("open", bar.open),
            ("high", bar.high),
            ("low", bar.low),
            ("close", bar.close),
            ("volume", bar.volume),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::NonFinite {
                index,
                date: bar.date,
                field: *field,
            });
        }

        if index > 0 {
            let previous = bars[index - 1].date;
            if bar.date <= previous {
                return Err(EngineError::NonMonotonic {
                    index,
                    previous,
                    current: bar.date,
                });
            }
        }
    }
    Ok(())
}

/// Compute every indicator for every bar.
///
/// Pure and causal: the output has the input's length and row `i` only
/// depends on bars `0..=i`.
pub fn augment(bars: &[PriceBar]) -> Result<Vec<IndicatorRow>, EngineError> {
    validate_series(bars)?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let ema_9 = calculate_ema_series(bars, EMA_FAST);
    let ema_20 = calculate_ema_series(bars, EMA_MEDIUM);
    let ema_21 = calculate_ema_series(bars, EMA_SLOW);
    let ema_50 = calculate_ema_series(bars, EMA_LONG);
    let rsi = calculate_rsi_series(&closes, RSI_PERIOD);
    let rsi_ema = calculate_rsi_ema_series(&rsi, RSI_EMA_PERIOD);
    let macd = calculate_macd_default(&closes);

    Ok(bars
        .iter()
        .enumerate()
        .map(|(i, bar)| IndicatorRow {
            bar: *bar,
            ema_9: ema_9[i],
            ema_20: ema_20[i],
            ema_21: ema_21[i],
            ema_50: ema_50[i],
            rsi: rsi[i],
            rsi_ema: rsi_ema[i],
            macd: macd[i],
        })
        .collect())
}
