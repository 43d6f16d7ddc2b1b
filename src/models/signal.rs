use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::chart::ChartData;

/// The five conditions of the breakout rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Breakout,
    TrendFilter,
    MomentumBand,
    MacdConfirmation,
    VolumeConfirmation,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Breakout,
        Condition::TrendFilter,
        Condition::MomentumBand,
        Condition::MacdConfirmation,
        Condition::VolumeConfirmation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Breakout => "Close > EMA(50) breakout",
            Condition::TrendFilter => "EMA(50) > EMA(9/21)",
            Condition::MomentumBand => "RSI(14) in 40-70 and above its EMA(20)",
            Condition::MacdConfirmation => "MACD Positive",
            Condition::VolumeConfirmation => "Volume > Avg",
        }
    }
}

/// Outcome of every condition at one row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    pub index: usize,
    pub date: NaiveDate,
    pub breakout: bool,
    pub trend_filter: bool,
    pub momentum_band: bool,
    pub macd_confirmation: bool,
    pub volume_confirmation: bool,
}

impl RuleEvaluation {
    pub fn holds(&self, condition: Condition) -> bool {
        match condition {
            Condition::Breakout => self.breakout,
            Condition::TrendFilter => self.trend_filter,
            Condition::MomentumBand => self.momentum_band,
            Condition::MacdConfirmation => self.macd_confirmation,
            Condition::VolumeConfirmation => self.volume_confirmation,
        }
    }

    /// All five conditions hold. No partial credit.
    pub fn is_signal(&self) -> bool {
        Condition::ALL.iter().all(|c| self.holds(*c))
    }

    pub fn failed(&self) -> Vec<Condition> {
        Condition::ALL
            .into_iter()
            .filter(|c| !self.holds(*c))
            .collect()
    }
}

/// A positive live verdict, ready to be formatted and charted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAlert {
    pub ticker: String,
    pub date: NaiveDate,
    pub close: f64,
    pub rsi: f64,
    pub chart: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiveCheck {
    InsufficientData { bars: usize, required: usize },
    NoSignal(RuleEvaluation),
    Signal(SignalAlert),
}

impl LiveCheck {
    pub fn is_signal(&self) -> bool {
        matches!(self, LiveCheck::Signal(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalHit {
    pub date: NaiveDate,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    pub ticker: String,
    pub lookback_days: u32,
    /// Number of rows the rule was evaluated at
    pub evaluated: usize,
    /// Positive verdicts in chronological order; may be empty
    pub hits: Vec<SignalHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BacktestOutcome {
    InsufficientData { bars: usize, required: usize },
    Completed(BacktestReport),
}
