//! Shapes of the JSON document consumed by the web app and email report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fundamentals::FundamentalSet;
use super::indicators::IndicatorSet;
use super::series::HistoryPoint;
use super::signal::ScoreResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityReport {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub current_price: f64,
    pub market_cap: u64,
    #[serde(flatten)]
    pub fundamentals: FundamentalSet,
    pub ideal_range: String,
    pub history: Vec<HistoryPoint>,
    #[serde(flatten)]
    pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoReport {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub image: Option<String>,
    pub current_price: f64,
    pub market_cap: u64,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<f64>,
    pub price_change_24h: f64,
    pub price_change_1m: Option<f64>,
    pub price_change_1y: Option<f64>,
    #[serde(flatten)]
    pub indicators: IndicatorSet,
    pub history: Vec<HistoryPoint>,
    #[serde(flatten)]
    pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub link: String,
    pub source: String,
    pub published: String,
    pub summary: String,
    pub category: String,
    pub image: Option<String>,
}

/// Aggregate output of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketReport {
    pub last_updated: DateTime<Utc>,
    pub nifty_50: Vec<EquityReport>,
    pub us_stocks: Vec<EquityReport>,
    pub crypto: Vec<CryptoReport>,
    pub news: Vec<NewsArticle>,
}

impl MarketReport {
    pub fn empty(last_updated: DateTime<Utc>) -> Self {
        Self {
            last_updated,
            nifty_50: Vec::new(),
            us_stocks: Vec::new(),
            crypto: Vec::new(),
            news: Vec::new(),
        }
    }
}
