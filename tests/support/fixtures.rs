//! Shared price series for the unit and integration suites
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use swingwatch::models::indicators::PriceBar;

/// A decline from 100 that turns into a slow grind just under the
/// 50-EMA and breaks above it on the last bar.
pub const BREAKOUT_CLOSES: [f64; 60] = [
    98.5, 99.1, 97.6, 98.2, 96.7, 97.3, 95.8, 96.4, 94.9, 95.5, 94.0, 94.6, 93.1, 93.7, 92.2,
    92.8, 91.3, 91.9, 90.4, 91.0, 89.5, 90.1, 88.6, 89.2, 87.7, 88.1, 87.9, 88.3, 88.1, 88.5,
    88.3, 88.7, 88.5, 88.9, 88.7, 89.1, 88.9, 89.3, 89.1, 89.5, 89.3, 89.7, 89.5, 89.9, 89.7,
    90.1, 89.9, 90.3, 90.1, 90.5, 90.3, 90.7, 90.5, 90.9, 90.7, 91.1, 90.9, 91.3, 91.1, 91.35,
];

pub const BREAKOUT_VOLUME: f64 = 2500.0;

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn day(offset: usize) -> NaiveDate {
    start_date() + Duration::days(offset as i64)
}

/// One bar per calendar day from `start_date()`.
pub fn bars_from(closes: &[f64], volumes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| {
            PriceBar::new(day(i), close, close + 0.5, close - 0.5, close, volume)
        })
        .collect()
}

/// Volume hovering around 1000 with a small three-bar ripple
pub fn ripple_volumes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 1000.0 + (i % 3) as f64 * 10.0).collect()
}

/// Satisfies all five conditions at the last bar and nowhere else.
pub fn breakout_series() -> Vec<PriceBar> {
    let mut volumes = ripple_volumes(BREAKOUT_CLOSES.len() - 1);
    volumes.push(BREAKOUT_VOLUME);
    bars_from(&BREAKOUT_CLOSES, &volumes)
}

/// Same closes, but the last bar trades below its trailing volume mean.
pub fn quiet_breakout_series() -> Vec<PriceBar> {
    let mut volumes = ripple_volumes(BREAKOUT_CLOSES.len() - 1);
    volumes.push(1000.0);
    bars_from(&BREAKOUT_CLOSES, &volumes)
}

/// Close and volume both strictly increasing.
pub fn rising_series(count: usize) -> Vec<PriceBar> {
    let closes: Vec<f64> = (0..count).map(|i| 100.0 + i as f64).collect();
    let volumes: Vec<f64> = (0..count).map(|i| 1000.0 + 10.0 * i as f64).collect();
    bars_from(&closes, &volumes)
}

pub fn flat_series(count: usize, price: f64) -> Vec<PriceBar> {
    bars_from(&vec![price; count], &vec![1000.0; count])
}

pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}
