//! Series math used by the indicators.
//!
//! Every function here is causal: output at index `i` only reads inputs
//! at or before `i`.

/// EMA smoothing factor for a span of `period` bars
pub fn ema_alpha(period: usize) -> f64 {
    debug_assert!(period > 0, "EMA period must be positive");
    2.0 / (period as f64 + 1.0)
}

/// One recursive EMA step
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = ema_alpha(period);
    value * alpha + previous * (1.0 - alpha)
}

/// Recursive EMA seeded with the first observation.
///
/// `ema[0] = values[0]`, `ema[i] = values[i] * a + ema[i - 1] * (1 - a)`.
/// No simple-average seed is used.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;

    for &value in values {
        let next = match previous {
            Some(prev) => ema_from_previous(value, prev, period),
            None => value,
        };
        out.push(next);
        previous = Some(next);
    }

    out
}

/// EMA over a series that may start with undefined values.
///
/// Leading `None`s stay `None`; the first defined value seeds the
/// recursion. An undefined value after the seed carries the last EMA.
pub fn ema_series_sparse(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;

    for value in values {
        let next = match (*value, previous) {
            (Some(v), Some(prev)) => Some(ema_from_previous(v, prev, period)),
            (Some(v), None) => Some(v),
            (None, prev) => prev,
        };
        out.push(next);
        previous = next;
    }

    out
}

/// Simple rolling mean; `None` until `window` values are available.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                mean(&values[i + 1 - window..=i])
            }
        })
        .collect()
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
