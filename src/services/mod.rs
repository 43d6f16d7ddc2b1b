//! External collaborators: market data, charts and notifications.

pub mod chart;
pub mod market_data;
pub mod notifier;
pub mod telegram;
pub mod yahoo;

pub use chart::{ChartRenderer, RenderedChart, PngChartRenderer};
pub use market_data::{InMemoryMarketDataProvider, Lookback, MarketDataProvider};
pub use notifier::{ChatId, Notifier, ParseMode};
pub use telegram::build_bot;
pub use yahoo::YahooMarketDataProvider;
