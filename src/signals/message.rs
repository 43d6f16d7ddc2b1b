//! User-facing text for verdicts and backtests.

use std::fmt::Write;

use crate::models::signal::{BacktestOutcome, SignalAlert};

pub const CURRENCY: &str = "₹";
pub const NO_SIGNALS_TODAY: &str = "ℹ️ No buy signals found today.";
pub const INSUFFICIENT_DATA: &str = "Insufficient data";

/// Markdown caption for a positive verdict with the confirmed checklist.
pub fn alert_caption(alert: &SignalAlert) -> String {
    format!(
        "🚀 *STRONG BUY* {ticker}\n\
         📅 {date}\n\
         💰 Price: {CURRENCY}{close:.2}\n\
         📈 Close > EMA(50) breakout: ✓\n\
         📈 EMA(50) > EMA(9/21): ✓\n\
         📊 RSI(14): {rsi:.1}\n\
         ⚡ MACD Positive: ✓\n\
         🔊 Volume > Avg: ✓",
        ticker = alert.ticker,
        date = alert.date.format("%Y-%m-%d"),
        close = alert.close,
        rsi = alert.rsi,
    )
}

pub fn no_signal_text(ticker: &str) -> String {
    format!("No signal for {}", ticker)
}

pub fn check_error_text(ticker: &str, reason: &str) -> String {
    format!("Error checking {}: {}", ticker, reason)
}

pub fn backtest_error_text(ticker: &str, reason: &str) -> String {
    format!("Error backtesting {}: {}", ticker, reason)
}

/// Plain-text backtest summary.
pub fn backtest_summary(ticker: &str, outcome: &BacktestOutcome) -> String {
    match outcome {
        BacktestOutcome::InsufficientData { .. } => format!("Not enough data for {}.", ticker),
        BacktestOutcome::Completed(report) if report.hits.is_empty() => format!(
            "No signals found for {} in last {} days.",
            report.ticker, report.lookback_days
        ),
        BacktestOutcome::Completed(report) => {
            let mut text = format!(
                "🔙 Backtest: {} (last {} days)\n",
                report.ticker, report.lookback_days
            );
            for hit in &report.hits {
                // Writing to a String cannot fail
                let _ = writeln!(
                    text,
                    "📅 {} - Price: {}{:.2}",
                    hit.date.format("%Y-%m-%d"),
                    CURRENCY,
                    hit.close
                );
            }
            text
        }
    }
}
