//! Yahoo chart endpoint behind wiremock

use std::time::Duration;

use serde_json::json;
use swingwatch::error::MarketDataError;
use swingwatch::services::market_data::{Lookback, MarketDataProvider};
use swingwatch::services::yahoo::YahooMarketDataProvider;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JAN_1_OPEN: i64 = 1_704_080_700;

async fn provider(server: &MockServer) -> YahooMarketDataProvider {
    YahooMarketDataProvider::new(&server.uri(), Duration::from_secs(5)).expect("provider builds")
}

#[tokio::test]
async fn fetches_daily_bars() {
    let server = MockServer::start().await;
    let timestamps: Vec<i64> = (0..3).map(|i| JAN_1_OPEN + i * 86_400).collect();
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/INFY.NS"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "INFY.NS", "gmtoffset": 19800 },
                    "timestamp": timestamps,
                    "indicators": { "quote": [{
                        "open": [1500.0, 1510.0, 1520.0],
                        "high": [1510.0, 1520.0, 1530.0],
                        "low": [1490.0, 1500.0, 1510.0],
                        "close": [1505.0, 1515.0, 1525.0],
                        "volume": [10000, 12000, 9000]
                    }]}
                }],
                "error": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bars = provider(&server)
        .await
        .get_daily_bars("INFY.NS", Lookback::days(60))
        .await
        .expect("bars fetched");
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[2].close, 1525.0);
    assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
}

#[tokio::test]
async fn reports_unknown_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE.NS"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .await
        .get_daily_bars("NOPE.NS", Lookback::days(60))
        .await
        .unwrap_err();
    match err {
        MarketDataError::Provider { ticker, description } => {
            assert_eq!(ticker, "NOPE.NS");
            assert!(description.contains("delisted"));
        }
        other => panic!("expected a provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .await
        .get_daily_bars("INFY.NS", Lookback::days(60))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Status { status, .. } if status.as_u16() == 503));
}

#[tokio::test]
async fn reports_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "NEW.NS", "gmtoffset": 19800 },
                    "indicators": { "quote": [{}] }
                }],
                "error": null
            }
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .await
        .get_daily_bars("NEW.NS", Lookback::days(60))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::NoData(ticker) if ticker == "NEW.NS"));
}
