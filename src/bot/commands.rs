use teloxide::utils::command::{BotCommands, ParseError};

pub const HELP_TEXT: &str = "📊 *Stock Signal Bot*\n\
Commands:\n\
/check TICKER - Analyze stock\n\
/scan - Scan watchlist\n\
/backtest TICKER - 700-day backtest\n\
/help - Show this";

/// First word after the command, `None` when nothing follows it.
fn optional_ticker(input: String) -> Result<(Option<String>,), ParseError> {
    Ok((input.split_whitespace().next().map(str::to_string),))
}

/// Slash commands; `/scan@MyBot` style mentions are handled by the derive.
///
/// Ticker arguments arrive raw and are normalised by the handler, which
/// knows the exchange suffix.
#[derive(BotCommands, Debug, Clone, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Stock Signal Bot commands:")]
pub enum Command {
    #[command(description = "show the command list")]
    Start,
    #[command(description = "show this")]
    Help,
    #[command(description = "analyze a stock", parse_with = optional_ticker)]
    Check(Option<String>),
    #[command(description = "scan the watchlist")]
    Scan,
    #[command(description = "700-day backtest", parse_with = optional_ticker)]
    Backtest(Option<String>),
}

impl Command {
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Start | Command::Help => "/help",
            Command::Check(_) => "Usage: /check TICKER",
            Command::Scan => "/scan",
            Command::Backtest(_) => "Usage: /backtest TICKER",
        }
    }
}
