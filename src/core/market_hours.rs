//! Trading-session gate for scheduled scans

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, TimeZone, Utc, Weekday};

/// India Standard Time, UTC+05:30
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketHours {
    pub offset: FixedOffset,
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl Default for MarketHours {
    /// NSE cash session: 09:15 to 15:30 IST, Monday to Friday
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(IST_OFFSET_SECONDS).expect("IST offset is within a day"),
            open: NaiveTime::from_hms_opt(9, 15, 0).expect("valid open time"),
            close: NaiveTime::from_hms_opt(15, 30, 0).expect("valid close time"),
        }
    }
}

impl MarketHours {
    /// Weekday and wall-clock time within `[open, close]` in the market timezone.
    pub fn is_open<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        let local = at.with_timezone(&self.offset);
        let weekday = !matches!(local.weekday(), Weekday::Sat | Weekday::Sun);
        let time = local.time();
        weekday && time >= self.open && time <= self.close
    }

    /// Current time in the market timezone
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}
