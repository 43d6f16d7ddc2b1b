//! Unit tests for the trading-session gate

use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc};
use swingwatch::core::market_hours::MarketHours;

fn ist(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(19_800)
        .unwrap()
        .with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .unwrap()
}

#[test]
fn test_default_session() {
    let hours = MarketHours::default();
    assert_eq!(hours.offset.local_minus_utc(), 19_800);
    assert_eq!(hours.open, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    assert_eq!(hours.close, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
}

#[test]
fn test_open_on_weekdays_inclusive() {
    let hours = MarketHours::default();
    // 1 January 2024 is a Monday
    assert!(hours.is_open(&ist(1, 9, 15)));
    assert!(hours.is_open(&ist(1, 12, 0)));
    assert!(hours.is_open(&ist(5, 15, 30)));
    assert!(!hours.is_open(&ist(1, 9, 14)));
    assert!(!hours.is_open(&ist(1, 15, 31)));
}

#[test]
fn test_closed_on_weekends() {
    let hours = MarketHours::default();
    assert!(!hours.is_open(&ist(6, 11, 0)));
    assert!(!hours.is_open(&ist(7, 11, 0)));
}

#[test]
fn test_converts_other_timezones() {
    let hours = MarketHours::default();
    // 04:00 UTC is 09:30 IST
    assert!(hours.is_open(&Utc.with_ymd_and_hms(2024, 1, 2, 4, 0, 0).unwrap()));
    // 22:00 UTC Friday is 03:30 IST Saturday
    assert!(!hours.is_open(&Utc.with_ymd_and_hms(2024, 1, 5, 22, 0, 0).unwrap()));
}
