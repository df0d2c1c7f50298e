//! Data source interfaces for the fetch adapters.
//!
//! Concrete providers (REST quotes, coin listings, RSS feeds) live outside
//! this crate and plug in through these traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::quotes::{CoinQuote, EquityQuote, RawArticle};

#[async_trait]
pub trait EquitySource: Send + Sync {
    /// Quote, fundamentals and recent closes for one ticker
    async fn fetch_equity(&self, symbol: &str) -> Result<EquityQuote>;
}

#[async_trait]
pub trait CryptoSource: Send + Sync {
    /// Top coins by market cap, each with its sparkline
    async fn fetch_coins(&self, top_n: usize) -> Result<Vec<CoinQuote>>;
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Headlines paired with the category of the feed they came from
    async fn fetch_articles(&self) -> Result<Vec<(String, RawArticle)>>;
}

/// Source that has nothing to report; stands in for unconfigured providers
pub struct PlaceholderSource;

#[async_trait]
impl EquitySource for PlaceholderSource {
    async fn fetch_equity(&self, symbol: &str) -> Result<EquityQuote> {
        Ok(EquityQuote::new(symbol, 0.0))
    }
}

#[async_trait]
impl CryptoSource for PlaceholderSource {
    async fn fetch_coins(&self, _top_n: usize) -> Result<Vec<CoinQuote>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl NewsSource for PlaceholderSource {
    async fn fetch_articles(&self) -> Result<Vec<(String, RawArticle)>> {
        Ok(Vec::new())
    }
}
