//! Telegram command surface

pub mod commands;
pub mod service;

pub use commands::{Command, HELP_TEXT};
pub use service::BotService;
