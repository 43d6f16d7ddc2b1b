//! Indicator engine: EMA, RSI and MACD series aligned to the bar index.

pub mod augment;
pub mod momentum;
pub mod trend;

pub use augment::*;
