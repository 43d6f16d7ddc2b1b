//! Helpers shared across the indicator implementations

pub mod math;
