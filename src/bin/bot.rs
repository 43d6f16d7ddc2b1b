//! Swingwatch Bot
//!
//! Answers Telegram commands and scans the watchlist on a schedule.

use dotenvy::dotenv;
use std::sync::Arc;
use swingwatch::bot::BotService;
use swingwatch::config::{get_environment, Config};
use swingwatch::core::{ScanScheduler, Scanner};
use swingwatch::logging::{self, LogOutput};
use swingwatch::services::{build_bot, PngChartRenderer, YahooMarketDataProvider};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging(LogOutput::Stdout)?;

    let config = Config::from_env()?;
    let token = config.require_telegram_token()?;

    info!("Starting Swingwatch Bot");
    info!(environment = %get_environment(), "Environment");
    info!(watchlist = ?config.watchlist, "Watchlist: {} tickers", config.watchlist.len());
    if config.chat_id.is_none() {
        warn!("TELEGRAM_CHAT_ID not set - scheduled scans will be skipped");
    }

    let provider = Arc::new(YahooMarketDataProvider::new(
        &config.yahoo_base_url,
        config.http_timeout,
    )?);
    let bot = build_bot(&config.telegram_api_url, token, config.http_timeout)?;
    let renderer = Arc::new(PngChartRenderer::default());

    let scanner = Arc::new(Scanner::new(provider, Arc::new(bot.clone()), renderer, &config));

    info!(
        interval = config.scan_interval.as_secs(),
        cron = %config.daily_scan_cron,
        "Starting scan scheduler..."
    );
    let scheduler = ScanScheduler::from_config(&config, scanner.clone())?;
    scheduler.start().await;

    let service = Arc::new(BotService::new(scanner, &config));
    info!("Bot started, waiting for shutdown signal...");

    // returns once the dispatcher has handled Ctrl-C
    service.run(bot).await;
    info!("Shutting down bot...");

    scheduler.stop().await;
    info!("Bot stopped");
    Ok(())
}
