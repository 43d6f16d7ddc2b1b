//! Live checks and backtests over an augmented series.

use crate::error::EngineError;
use crate::indicators::augment;
use crate::models::chart::ChartData;
use crate::models::indicators::{IndicatorRow, PriceBar};
use crate::models::signal::{
    BacktestOutcome, BacktestReport, LiveCheck, RuleEvaluation, SignalAlert, SignalHit,
};
use crate::signals::rules;

pub const MIN_CANDLES: usize = 50;

/// Bars shown on the signal chart
pub const CHART_WINDOW: usize = 30;

pub struct SignalEngine;

impl SignalEngine {
    /// Augment `bars` and evaluate the rule at the last bar.
    pub fn check_latest(ticker: &str, bars: &[PriceBar]) -> Result<LiveCheck, EngineError> {
        if bars.len() < MIN_CANDLES {
            return Ok(LiveCheck::InsufficientData {
                bars: bars.len(),
                required: MIN_CANDLES,
            });
        }
        let rows = augment(bars)?;
        Self::check_rows(ticker, &rows)
    }

    /// Evaluate the rule at the last of already augmented rows.
    pub fn check_rows(ticker: &str, rows: &[IndicatorRow]) -> Result<LiveCheck, EngineError> {
        if rows.len() < MIN_CANDLES {
            return Ok(LiveCheck::InsufficientData {
                bars: rows.len(),
                required: MIN_CANDLES,
            });
        }

        let index = rows.len() - 1;
        let evaluation = rules::evaluate(rows, index)?;
        if !evaluation.is_signal() {
            return Ok(LiveCheck::NoSignal(evaluation));
        }

        let latest = &rows[index];
        Ok(LiveCheck::Signal(SignalAlert {
            ticker: ticker.to_string(),
            date: latest.date(),
            close: latest.close(),
            // momentum_band held, so RSI is defined
            rsi: latest.rsi.unwrap_or_default(),
            chart: ChartData::from_rows(ticker, rows, CHART_WINDOW),
        }))
    }

    /// Evaluate the rule at every index from `MIN_CANDLES` to the end,
    /// in ascending order.
    pub fn evaluate_history(rows: &[IndicatorRow]) -> Result<Vec<RuleEvaluation>, EngineError> {
        (MIN_CANDLES..rows.len())
            .map(|index| rules::evaluate(rows, index))
            .collect()
    }

    /// Augment `bars` and collect every positive verdict chronologically.
    pub fn backtest(
        ticker: &str,
        bars: &[PriceBar],
        lookback_days: u32,
    ) -> Result<BacktestOutcome, EngineError> {
        if bars.len() < MIN_CANDLES {
            return Ok(BacktestOutcome::InsufficientData {
                bars: bars.len(),
                required: MIN_CANDLES,
            });
        }

        let rows = augment(bars)?;
        let evaluations = Self::evaluate_history(&rows)?;
        let hits = evaluations
            .iter()
            .filter(|e| e.is_signal())
            .map(|e| SignalHit {
                date: e.date,
                close: rows[e.index].close(),
            })
            .collect();

        Ok(BacktestOutcome::Completed(BacktestReport {
            ticker: ticker.to_string(),
            lookback_days,
            evaluated: evaluations.len(),
            hits,
        }))
    }
}
