//! Signal evaluation: the breakout rule, live checks and backtests.

pub mod engine;
pub mod message;
pub mod rules;

pub use engine::*;
pub use message::*;
pub use rules::*;
