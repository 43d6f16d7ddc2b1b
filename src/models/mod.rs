//! Shared data models spanning the engine layers.

pub mod chart;
pub mod indicators;
pub mod signal;
pub mod ticker;

pub use chart::{BarColor, ChartData, ChartPoint};
pub use indicators::{IndicatorRow, MacdValues, PriceBar};
pub use signal::{
    BacktestOutcome, BacktestReport, Condition, LiveCheck, RuleEvaluation, SignalAlert, SignalHit,
};
pub use ticker::normalize_ticker;
