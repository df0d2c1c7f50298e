//! Raw records handed over by the fetch adapters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fundamentals::FundamentalSet;

/// One equity as returned by a market-data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityQuote {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub current_price: f64,
    pub market_cap: u64,
    #[serde(default)]
    pub target_mean_price: Option<f64>,
    #[serde(default)]
    pub fundamentals: FundamentalSet,
    #[serde(default)]
    pub closes: Vec<(NaiveDate, f64)>,
}

impl EquityQuote {
    pub fn new(symbol: &str, current_price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "Unknown".to_string(),
            industry: "Unknown".to_string(),
            current_price,
            market_cap: 0,
            target_mean_price: None,
            fundamentals: FundamentalSet::default(),
            closes: Vec::new(),
        }
    }

    pub fn with_fundamentals(mut self, fundamentals: FundamentalSet) -> Self {
        self.fundamentals = fundamentals;
        self
    }

    /// NSE listings are quoted in rupees
    pub fn is_indian(&self) -> bool {
        self.symbol.ends_with(".NS")
    }

    /// Analyst target formatted with the listing currency, `N/A` when absent
    pub fn ideal_range(&self) -> String {
        match self.target_mean_price {
            Some(target) if target > 0.0 && target.is_finite() => {
                let currency = if self.is_indian() { "₹" } else { "$" };
                format!("{}{:.2}", currency, target)
            }
            _ => "N/A".to_string(),
        }
    }
}

/// One coin from a markets listing, with its compressed price sparkline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinQuote {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub current_price: f64,
    #[serde(default)]
    pub market_cap: u64,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_1m: Option<f64>,
    #[serde(default)]
    pub price_change_1y: Option<f64>,
    #[serde(default)]
    pub sparkline: Vec<f64>,
}

impl CoinQuote {
    pub fn new(id: &str, symbol: &str, current_price: f64) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: id.to_string(),
            image: None,
            current_price,
            market_cap: 0,
            market_cap_rank: None,
            total_volume: None,
            high_24h: None,
            low_24h: None,
            price_change_24h: None,
            price_change_1m: None,
            price_change_1y: None,
            sparkline: Vec::new(),
        }
    }

    pub fn with_sparkline(mut self, sparkline: Vec<f64>) -> Self {
        self.sparkline = sparkline;
        self
    }
}

/// One headline as read from a feed, before normalisation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    pub link: String,
    pub source: String,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: Option<String>,
}
