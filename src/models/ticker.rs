/// Upper-case a ticker and append the exchange suffix when it has none.
///
/// `"infy"` with suffix `".NS"` becomes `"INFY.NS"`; `"aapl.us"` stays
/// `"AAPL.US"`. Returns `None` for blank input.
pub fn normalize_ticker(raw: &str, exchange_suffix: &str) -> Option<String> {
    let ticker = raw.trim().to_uppercase();
    if ticker.is_empty() {
        return None;
    }

    if ticker.contains('.') || exchange_suffix.is_empty() {
        Some(ticker)
    } else {
        Some(format!("{}{}", ticker, exchange_suffix.to_uppercase()))
    }
}
