//! Unit tests for command parsing

use swingwatch::bot::commands::{Command, HELP_TEXT};
use teloxide::utils::command::{BotCommands, ParseError};

const BOT: &str = "SignalBot";

#[test]
fn test_parse_help_commands() {
    assert_eq!(Command::parse("/start", BOT).unwrap(), Command::Start);
    assert_eq!(Command::parse("/help", BOT).unwrap(), Command::Help);
    assert!(HELP_TEXT.contains("/check TICKER"));
    assert!(HELP_TEXT.contains("/backtest TICKER"));
}

#[test]
fn test_parse_check_keeps_first_word() {
    assert_eq!(
        Command::parse("/check infy", BOT).unwrap(),
        Command::Check(Some("infy".to_string()))
    );
    assert_eq!(
        Command::parse("/check@SignalBot  reliance.bo extra", BOT).unwrap(),
        Command::Check(Some("reliance.bo".to_string()))
    );
}

#[test]
fn test_parse_missing_argument() {
    let check = Command::parse("/check", BOT).unwrap();
    assert_eq!(check, Command::Check(None));
    assert_eq!(check.usage(), "Usage: /check TICKER");

    let backtest = Command::parse("/backtest   ", BOT).unwrap();
    assert_eq!(backtest, Command::Backtest(None));
    assert_eq!(backtest.usage(), "Usage: /backtest TICKER");
}

#[test]
fn test_parse_scan_and_backtest() {
    assert_eq!(Command::parse("/scan", BOT).unwrap(), Command::Scan);
    assert_eq!(
        Command::parse("/backtest tcs", BOT).unwrap(),
        Command::Backtest(Some("tcs".to_string()))
    );
}

#[test]
fn test_parse_rejects_other_bots() {
    assert!(matches!(
        Command::parse("/scan@OtherBot", BOT),
        Err(ParseError::WrongBotName(_))
    ));
}
