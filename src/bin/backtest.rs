//! Offline backtest and live check against Yahoo data, printed to stdout.

use clap::Parser;
use dotenvy::dotenv;
use swingwatch::config::Config;
use swingwatch::indicators::augment;
use swingwatch::logging::{self, LogOutput};
use swingwatch::models::signal::LiveCheck;
use swingwatch::models::ticker::normalize_ticker;
use swingwatch::services::{Lookback, MarketDataProvider, YahooMarketDataProvider};
use swingwatch::signals::{alert_caption, backtest_summary, SignalEngine};

#[derive(Debug, Parser)]
#[command(
    name = "swingwatch-backtest",
    version,
    about = "Backtest the EMA(50) breakout rule on one ticker"
)]
struct Cli {
    /// Ticker symbol; the default exchange suffix is added when missing
    #[arg(long)]
    ticker: String,
    /// Calendar days of history (defaults to BACKTEST_DAYS)
    #[arg(long)]
    days: Option<u32>,
    /// Also evaluate the latest bar and print its indicator row
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging(LogOutput::Stderr)?;

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let ticker = normalize_ticker(&cli.ticker, &config.exchange_suffix)
        .ok_or("ticker must not be blank")?;
    let days = cli.days.unwrap_or(config.backtest_days);

    let provider = YahooMarketDataProvider::new(&config.yahoo_base_url, config.http_timeout)?;
    let bars = provider.get_daily_bars(&ticker, Lookback::days(days)).await?;

    let outcome = SignalEngine::backtest(&ticker, &bars, days)?;
    println!("{}", backtest_summary(&ticker, &outcome));

    if cli.check {
        let rows = augment(&bars)?;
        if let Some(latest) = rows.last() {
            println!("{}", serde_json::to_string_pretty(latest)?);
        }
        match SignalEngine::check_rows(&ticker, &rows)? {
            LiveCheck::Signal(alert) => println!("{}", alert_caption(&alert)),
            LiveCheck::NoSignal(evaluation) => {
                println!("No signal for {}", ticker);
                for condition in evaluation.failed() {
                    println!("  ✗ {}", condition.label());
                }
            }
            LiveCheck::InsufficientData { bars, required } => {
                println!("Insufficient data: {} bars, {} required", bars, required)
            }
        }
    }

    Ok(())
}
