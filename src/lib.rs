//! Swingwatch: daily technical-analysis signal scanner.
//!
//! The indicator engine and rule evaluator are pure and synchronous; the
//! scanner, scheduler and bot wire them to market data and Telegram.

pub mod bot;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
