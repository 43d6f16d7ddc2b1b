//! RSI (Relative Strength Index) indicator

use crate::common::math;

pub const RSI_PERIOD: usize = 14;
pub const RSI_EMA_PERIOD: usize = 20;

/// RSI from the mean gain and mean loss of a window.
///
/// RSI = 100 - (100 / (1 + RS)), RS = mean gain / mean loss.
/// A zero mean loss means no downward move in the window: RSI is 100.
pub fn rsi_from_means(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI series over closes using a simple rolling mean of gains and losses.
///
/// The first bar has no delta and contributes a zero gain and a zero
/// loss, so the first defined value sits at index `period - 1`.
pub fn calculate_rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        let change = if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let avg_gains = math::rolling_mean(&gains, period);
    let avg_losses = math::rolling_mean(&losses, period);

    avg_gains
        .into_iter()
        .zip(avg_losses)
        .map(|(gain, loss)| Some(rsi_from_means(gain?, loss?)))
        .collect()
}

/// EMA of an RSI series, seeded by its first defined value
pub fn calculate_rsi_ema_series(rsi: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    math::ema_series_sparse(rsi, period)
}
