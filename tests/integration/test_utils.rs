use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use marketlens::config::PipelineConfig;
use marketlens::models::{CoinQuote, EquityQuote, FundamentalSet, RawArticle};
use marketlens::services::{CryptoSource, EquitySource, NewsSource};
use marketlens::{PipelineError, Result};

/// Equity source backed by a fixed map; unknown symbols fail like an HTTP 404.
#[derive(Default)]
pub struct FakeEquitySource {
    quotes: HashMap<String, EquityQuote>,
    slow: HashMap<String, Duration>,
}

#[allow(dead_code)]
impl FakeEquitySource {
    pub fn with_quote(mut self, quote: EquityQuote) -> Self {
        self.quotes.insert(quote.symbol.clone(), quote);
        self
    }

    pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
        self.slow.insert(symbol.to_string(), delay);
        self
    }
}

#[async_trait]
impl EquitySource for FakeEquitySource {
    async fn fetch_equity(&self, symbol: &str) -> Result<EquityQuote> {
        if let Some(delay) = self.slow.get(symbol) {
            tokio::time::sleep(*delay).await;
        }
        self.quotes
            .get(symbol)
            .cloned()
            .ok_or_else(|| PipelineError::upstream("equities", format!("{} not found", symbol)))
    }
}

pub struct FakeCryptoSource {
    pub coins: Vec<CoinQuote>,
}

#[async_trait]
impl CryptoSource for FakeCryptoSource {
    async fn fetch_coins(&self, top_n: usize) -> Result<Vec<CoinQuote>> {
        Ok(self.coins.iter().take(top_n).cloned().collect())
    }
}

/// Crypto listing that is always throttled
pub struct RateLimitedCryptoSource;

#[async_trait]
impl CryptoSource for RateLimitedCryptoSource {
    async fn fetch_coins(&self, _top_n: usize) -> Result<Vec<CoinQuote>> {
        Err(PipelineError::RateLimited("coin listing".to_string()))
    }
}

pub struct FakeNewsSource {
    pub articles: Vec<(String, RawArticle)>,
}

#[async_trait]
impl NewsSource for FakeNewsSource {
    async fn fetch_articles(&self) -> Result<Vec<(String, RawArticle)>> {
        Ok(self.articles.clone())
    }
}

pub fn equity(symbol: &str, price: f64, roce: f64) -> EquityQuote {
    EquityQuote::new(symbol, price).with_fundamentals(FundamentalSet::default().with_roce(roce))
}

pub fn flat_coin(id: &str, price: f64) -> CoinQuote {
    CoinQuote::new(id, id, price).with_sparkline(vec![price; 168])
}

pub fn trending_coin(id: &str, step: f64) -> CoinQuote {
    let sparkline: Vec<f64> = (0..168).map(|i| 200.0 + i as f64 * step).collect();
    let last = *sparkline.last().unwrap_or(&0.0);
    CoinQuote::new(id, id, last).with_sparkline(sparkline)
}

pub fn headline(category: &str, title: &str, published: &str) -> (String, RawArticle) {
    (
        category.to_string(),
        RawArticle {
            title: title.to_string(),
            link: format!("https://news.example.com/{}", title.to_lowercase().replace(' ', "-")),
            source: "Example Wire".to_string(),
            published: Some(published.to_string()),
            summary: "x".repeat(500),
            image: None,
        },
    )
}

/// Fast config for tests: no batch pauses, short timeout
pub fn test_config(nifty: &[&str], us: &[&str]) -> PipelineConfig {
    PipelineConfig {
        worker_concurrency: 4,
        task_timeout: Duration::from_millis(200),
        batch_size: 2,
        batch_delay: Duration::ZERO,
        crypto_top_n: 20,
        news_limit: 100,
        nifty_tickers: nifty.iter().map(|s| s.to_string()).collect(),
        us_tickers: us.iter().map(|s| s.to_string()).collect(),
    }
}
