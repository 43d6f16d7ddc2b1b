//! Orchestration around the engine: per-ticker pipeline and scheduling

pub mod market_hours;
pub mod scanner;
pub mod scheduler;

pub use market_hours::*;
pub use scanner::*;
pub use scheduler::*;
