//! Report runtime: fetch every category, score, and assemble the report

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::report::{CryptoReport, EquityReport, MarketReport, NewsArticle};
use crate::services::market_data::{CryptoSource, EquitySource, NewsSource};
use crate::services::news::merge_articles;
use crate::signals::engine::SignalEngine;

use super::pool::TaskPool;

/// One run of the pipeline over injected data sources
pub struct ReportRuntime {
    config: PipelineConfig,
    pool: TaskPool,
    equities: Arc<dyn EquitySource>,
    crypto: Arc<dyn CryptoSource>,
    news: Arc<dyn NewsSource>,
}

impl ReportRuntime {
    pub fn new(
        config: PipelineConfig,
        equities: Arc<dyn EquitySource>,
        crypto: Arc<dyn CryptoSource>,
        news: Arc<dyn NewsSource>,
    ) -> Result<Self> {
        config.validate()?;
        let pool = TaskPool::from_config(&config);
        Ok(Self {
            config,
            pool,
            equities,
            crypto,
            news,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the report stamped with the current time
    pub async fn run(&self) -> MarketReport {
        self.run_at(Utc::now()).await
    }

    /// Build the report as of `now`.
    ///
    /// Categories are fetched concurrently; a category whose source fails
    /// comes back empty and the run still completes.
    pub async fn run_at(&self, now: DateTime<Utc>) -> MarketReport {
        let started = Instant::now();
        info!(
            workers = self.pool.workers(),
            nifty_tickers = self.config.nifty_tickers.len(),
            us_tickers = self.config.us_tickers.len(),
            "Starting report run"
        );

        let (nifty_50, us_stocks, crypto, news) = tokio::join!(
            self.equity_category("nifty_50", &self.config.nifty_tickers),
            self.equity_category("us_stocks", &self.config.us_tickers),
            self.crypto_category(now.date_naive()),
            self.news_category(now),
        );

        info!(
            nifty_50 = nifty_50.len(),
            us_stocks = us_stocks.len(),
            crypto = crypto.len(),
            news = news.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Report run complete"
        );

        MarketReport {
            last_updated: now,
            nifty_50,
            us_stocks,
            crypto,
            news,
        }
    }

    async fn equity_category(&self, category: &str, tickers: &[String]) -> Vec<EquityReport> {
        let results = self
            .pool
            .run(tickers.to_vec(), |symbol| {
                let source = Arc::clone(&self.equities);
                async move { source.fetch_equity(&symbol).await }
            })
            .await;

        let mut reports: Vec<EquityReport> = tickers
            .iter()
            .zip(results)
            .filter_map(|(symbol, result)| match result {
                Ok(quote) if quote.current_price.is_finite() && quote.current_price > 0.0 => {
                    Some(SignalEngine::evaluate_equity(&quote))
                }
                Ok(_) => {
                    warn!(category, symbol = %symbol, "No price for ticker, skipping");
                    None
                }
                Err(e) => {
                    warn!(category, symbol = %symbol, error = %e, "Failed to fetch ticker");
                    None
                }
            })
            .collect();

        sort_by_score(&mut reports, |r| r.result.score);
        info!(category, fetched = reports.len(), requested = tickers.len(), "Equities scored");
        reports
    }

    async fn crypto_category(&self, today: NaiveDate) -> Vec<CryptoReport> {
        let top_n = self.config.crypto_top_n;
        let coins = match self.pool.run_one(self.crypto.fetch_coins(top_n)).await {
            Ok(coins) => coins,
            Err(e) => {
                warn!(error = %e, "Failed to fetch crypto listing");
                return Vec::new();
            }
        };

        let mut reports: Vec<CryptoReport> = coins
            .iter()
            .take(top_n)
            .filter(|coin| coin.current_price.is_finite())
            .map(|coin| SignalEngine::evaluate_crypto(coin, today))
            .collect();

        sort_by_score(&mut reports, |r| r.result.score);
        info!(fetched = reports.len(), top_n, "Crypto scored");
        reports
    }

    async fn news_category(&self, now: DateTime<Utc>) -> Vec<NewsArticle> {
        match self.pool.run_one(self.news.fetch_articles()).await {
            Ok(raw) => {
                let fetched = raw.len();
                let articles = merge_articles(raw, now, self.config.news_limit);
                info!(fetched, kept = articles.len(), "News merged");
                articles
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch news");
                Vec::new()
            }
        }
    }
}

/// Highest score first; ties keep fetch order
fn sort_by_score<T>(items: &mut [T], score: impl Fn(&T) -> u8) {
    items.sort_by(|a, b| score(b).cmp(&score(a)));
}
