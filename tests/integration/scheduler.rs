//! Market-hours gating of scheduled scans

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone};
use swingwatch::core::market_hours::MarketHours;
use swingwatch::core::scheduler::{run_scheduled_scan, ScanScheduler, ScanTrigger};
use swingwatch::services::notifier::ChatId;

use crate::test_utils::{recording_scanner, test_config, Sent};

fn ist(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(19_800)
        .unwrap()
        .with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .unwrap()
}

#[tokio::test]
async fn scans_during_market_hours() {
    let (scanner, notifier) = recording_scanner(&["BRK.NS", "FLAT.NS"]);
    let chat = ChatId::Id(42);

    let summary = run_scheduled_scan(&scanner, Some(&chat), &MarketHours::default(), &ist(2, 11, 0))
        .await
        .expect("scan runs while the market is open");
    assert_eq!(summary.signals, 1);
    assert!(matches!(notifier.sent().as_slice(), [Sent::Chart { .. }]));
}

#[tokio::test]
async fn skips_outside_market_hours() {
    let (scanner, notifier) = recording_scanner(&["BRK.NS"]);
    let chat = ChatId::Id(42);
    let hours = MarketHours::default();

    assert!(run_scheduled_scan(&scanner, Some(&chat), &hours, &ist(2, 8, 0)).await.is_none());
    assert!(run_scheduled_scan(&scanner, Some(&chat), &hours, &ist(2, 16, 0)).await.is_none());
    // Saturday
    assert!(run_scheduled_scan(&scanner, Some(&chat), &hours, &ist(6, 11, 0)).await.is_none());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn skips_without_destination_chat() {
    let (scanner, notifier) = recording_scanner(&["BRK.NS"]);
    assert!(run_scheduled_scan(&scanner, None, &MarketHours::default(), &ist(2, 11, 0))
        .await
        .is_none());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn scheduler_starts_and_stops() {
    let (scanner, _) = recording_scanner(&["FLAT.NS"]);
    let scheduler = ScanScheduler::new(
        Arc::new(scanner),
        Some(ChatId::Id(42)),
        MarketHours::default(),
        vec![ScanTrigger::interval(
            Duration::from_secs(3600),
            Duration::from_secs(3600),
        )],
    );

    assert!(!scheduler.is_running().await);
    scheduler.start().await;
    assert!(scheduler.is_running().await);
    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[tokio::test]
async fn scheduler_builds_both_triggers_from_config() {
    let (scanner, _) = recording_scanner(&["FLAT.NS"]);
    let scheduler = ScanScheduler::from_config(&test_config(&["FLAT.NS"]), Arc::new(scanner))
        .expect("default cron parses");
    scheduler.start().await;
    assert!(scheduler.is_running().await);
    scheduler.stop().await;
}
