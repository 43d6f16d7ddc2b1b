//! Yahoo Finance daily bar provider

pub mod messages;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use url::Url;

use crate::error::MarketDataError;
use crate::models::indicators::PriceBar;
use crate::services::market_data::{Lookback, MarketDataProvider};
use messages::ChartResponse;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; swingwatch/0.1)";

pub struct YahooMarketDataProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooMarketDataProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, MarketDataError> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// `{base}/v8/finance/chart/{ticker}?period1=..&period2=..&interval=1d`
    pub fn chart_url(&self, ticker: &str, lookback: Lookback) -> Result<Url, MarketDataError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", ticker]);

        let period2 = Utc::now().timestamp();
        let period1 = period2 - i64::from(lookback.days) * 86_400;
        url.query_pairs_mut()
            .append_pair("period1", &period1.to_string())
            .append_pair("period2", &period2.to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "history");

        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_daily_bars(
        &self,
        ticker: &str,
        lookback: Lookback,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        let url = self.chart_url(ticker, lookback)?;
        debug!(ticker = %ticker, url = %url, "Yahoo: requesting daily bars");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed: ChartResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(MarketDataError::Status {
                    ticker: ticker.to_string(),
                    status,
                })
            }
            Err(error) => {
                return Err(MarketDataError::Decode {
                    ticker: ticker.to_string(),
                    error,
                })
            }
        };

        if let Some(error) = parsed.chart.error {
            return Err(MarketDataError::Provider {
                ticker: ticker.to_string(),
                description: format!("{}: {}", error.code, error.description),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::Status {
                ticker: ticker.to_string(),
                status,
            });
        }

        let bars = parsed
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(|result| result.into_bars())
            .unwrap_or_default();

        if bars.is_empty() {
            return Err(MarketDataError::NoData(ticker.to_string()));
        }

        debug!(ticker = %ticker, count = bars.len(), "Yahoo: fetched {} bars for {}", bars.len(), ticker);
        Ok(bars)
    }
}
