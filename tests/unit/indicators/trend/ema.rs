//! Unit tests for EMA indicator

use swingwatch::indicators::trend::{calculate_ema_series, EMA_FAST, EMA_LONG, EMA_MEDIUM, EMA_SLOW};

use crate::fixtures::{assert_close, breakout_series, flat_series, rising_series};

#[test]
fn test_ema_periods() {
    assert_eq!((EMA_FAST, EMA_MEDIUM, EMA_SLOW, EMA_LONG), (9, 20, 21, 50));
}

#[test]
fn test_ema_constant_series() {
    let bars = flat_series(60, 123.45);
    for period in [EMA_FAST, EMA_MEDIUM, EMA_SLOW, EMA_LONG] {
        let ema = calculate_ema_series(&bars, period);
        assert_eq!(ema.len(), bars.len());
        assert!(ema.iter().all(|v| (v - 123.45).abs() < 1e-9));
    }
}

#[test]
fn test_ema_defined_from_first_bar() {
    let bars = breakout_series();
    let ema = calculate_ema_series(&bars, EMA_LONG);
    assert_close(ema[0], bars[0].close, 1e-12);
    assert_close(ema[1], bars[1].close * 2.0 / 51.0 + bars[0].close * 49.0 / 51.0, 1e-12);
}

#[test]
fn test_ema_lags_a_rising_series() {
    let bars = rising_series(60);
    let fast = calculate_ema_series(&bars, EMA_FAST);
    let slow = calculate_ema_series(&bars, EMA_LONG);
    let last = bars.len() - 1;
    assert!(slow[last] < fast[last]);
    assert!(fast[last] < bars[last].close);
}

#[test]
fn test_ema_breakout_fixture_values() {
    let bars = breakout_series();
    let last = bars.len() - 1;
    assert_close(calculate_ema_series(&bars, EMA_FAST)[last], 90.9377, 1e-3);
    assert_close(calculate_ema_series(&bars, EMA_SLOW)[last], 90.5339, 1e-3);
    assert_close(calculate_ema_series(&bars, EMA_LONG)[last], 91.2208, 1e-3);
}
