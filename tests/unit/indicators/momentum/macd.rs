//! Unit tests for MACD indicator

use swingwatch::indicators::momentum::{calculate_macd_default, calculate_macd_series};

use crate::fixtures::{assert_close, breakout_series, closes, flat_series, rising_series};

#[test]
fn test_macd_histogram_is_line_minus_signal() {
    let macd = calculate_macd_default(&closes(&breakout_series()));
    assert_eq!(macd.len(), 60);
    for values in &macd {
        assert_close(values.histogram, values.line - values.signal, 1e-12);
    }
    assert_close(macd[59].histogram, 0.1726, 1e-3);
}

#[test]
fn test_macd_starts_at_zero() {
    let macd = calculate_macd_default(&closes(&rising_series(5)));
    assert_eq!(macd[0].line, 0.0);
    assert_eq!(macd[0].signal, 0.0);
    assert_eq!(macd[0].histogram, 0.0);
}

#[test]
fn test_macd_flat_series_is_zero() {
    let macd = calculate_macd_default(&closes(&flat_series(40, 75.0)));
    assert!(macd.iter().all(|v| v.line.abs() < 1e-9 && v.histogram.abs() < 1e-9));
}

#[test]
fn test_macd_rising_series_positive_histogram() {
    let macd = calculate_macd_series(&closes(&rising_series(60)), 12, 26, 9);
    assert!(macd[1..].iter().all(|v| v.line > 0.0 && v.histogram > 0.0));
}
