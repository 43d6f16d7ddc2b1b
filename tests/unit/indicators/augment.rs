//! Unit tests for indicator augmentation and series validation

use swingwatch::error::EngineError;
use swingwatch::indicators::{augment, validate_series};

use crate::fixtures::{breakout_series, day, flat_series};

#[test]
fn test_augment_preserves_length_and_order() {
    let bars = breakout_series();
    let rows = augment(&bars).unwrap();
    assert_eq!(rows.len(), bars.len());
    for (row, bar) in rows.iter().zip(&bars) {
        assert_eq!(row.bar, *bar);
    }
}

#[test]
fn test_augment_rsi_fields_undefined_early() {
    let rows = augment(&breakout_series()).unwrap();
    assert!(rows[..13].iter().all(|r| r.rsi.is_none() && r.rsi_ema.is_none()));
    assert!(rows[13..].iter().all(|r| r.rsi.is_some() && r.rsi_ema.is_some()));
}

#[test]
fn test_augment_is_causal() {
    let bars = breakout_series();
    let full = augment(&bars).unwrap();
    let prefix = augment(&bars[..40]).unwrap();
    assert_eq!(&full[..40], &prefix[..]);
}

#[test]
fn test_augment_empty() {
    assert!(augment(&[]).unwrap().is_empty());
}

#[test]
fn test_rejects_duplicate_date() {
    let mut bars = flat_series(10, 20.0);
    bars[5].date = bars[4].date;
    let err = augment(&bars).unwrap_err();
    assert_eq!(
        err,
        EngineError::NonMonotonic {
            index: 5,
            previous: day(4),
            current: day(4),
        }
    );
}

#[test]
fn test_rejects_descending_dates() {
    let mut bars = flat_series(10, 20.0);
    bars.swap(2, 3);
    assert!(matches!(
        validate_series(&bars),
        Err(EngineError::NonMonotonic { index: 3, .. })
    ));
}

#[test]
fn test_rejects_non_finite_values() {
    let mut bars = flat_series(10, 20.0);
    bars[7].close = f64::NAN;
    assert_eq!(
        augment(&bars).unwrap_err(),
        EngineError::NonFinite {
            index: 7,
            date: day(7),
            field: "close",
        }
    );

    let mut bars = flat_series(10, 20.0);
    bars[0].volume = f64::INFINITY;
    assert!(matches!(
        validate_series(&bars),
        Err(EngineError::NonFinite { field: "volume", .. })
    ));
}
