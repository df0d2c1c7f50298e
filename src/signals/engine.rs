//! Signal engine: turns raw quotes into scored report entries.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::indicators::compute_indicator_set;
use crate::models::quotes::{CoinQuote, EquityQuote};
use crate::models::report::{CryptoReport, EquityReport};
use crate::models::series::{history_from_dated, history_from_sparkline, PriceSeries, FALLBACK_SERIES_LEN};

use super::crypto::{CryptoInputs, CryptoScorer, PriceChanges};
use super::equity::EquityScorer;

/// Sparklines shorter than this are replaced by a flat series at the current price
pub const MIN_SPARKLINE_POINTS: usize = 30;

pub const CRYPTO_SECTOR: &str = "Cryptocurrency";

pub struct SignalEngine;

impl SignalEngine {
    /// Price series used for a coin's indicators
    pub fn crypto_series(quote: &CoinQuote) -> PriceSeries {
        match PriceSeries::new(quote.sparkline.clone()) {
            Ok(series) if series.len() >= MIN_SPARKLINE_POINTS => series,
            _ => {
                warn!(
                    coin = %quote.id,
                    points = quote.sparkline.len(),
                    "Sparkline too short, using flat series at current price"
                );
                PriceSeries::flat(quote.current_price, FALLBACK_SERIES_LEN)
            }
        }
    }

    /// Evaluate one coin: series, indicators, score and chart history
    pub fn evaluate_crypto(quote: &CoinQuote, today: NaiveDate) -> CryptoReport {
        let series = Self::crypto_series(quote);
        let indicators = compute_indicator_set(&series, quote.current_price);

        let result = CryptoScorer::score(&CryptoInputs {
            current_price: quote.current_price,
            indicators: &indicators,
            changes: PriceChanges {
                change_24h: quote.price_change_24h,
                change_1m: quote.price_change_1m,
            },
        });

        debug!(
            coin = %quote.id,
            score = result.score,
            recommendation = %result.recommendation,
            rsi = indicators.rsi,
            "Crypto evaluated"
        );

        CryptoReport {
            id: quote.id.clone(),
            symbol: quote.symbol.to_uppercase(),
            name: quote.name.clone(),
            sector: CRYPTO_SECTOR.to_string(),
            image: quote.image.clone(),
            current_price: quote.current_price,
            market_cap: quote.market_cap,
            market_cap_rank: quote.market_cap_rank,
            total_volume: quote.total_volume,
            price_change_24h: quote.price_change_24h.unwrap_or(0.0),
            price_change_1m: quote.price_change_1m,
            price_change_1y: quote.price_change_1y,
            indicators,
            history: history_from_sparkline(series.as_slice(), today),
            result,
        }
    }

    /// Evaluate one equity from its fundamentals
    pub fn evaluate_equity(quote: &EquityQuote) -> EquityReport {
        let result = EquityScorer::score(&quote.fundamentals);

        debug!(
            symbol = %quote.symbol,
            score = result.score,
            recommendation = %result.recommendation,
            "Equity evaluated"
        );

        EquityReport {
            symbol: quote.symbol.clone(),
            name: quote.name.clone(),
            sector: quote.sector.clone(),
            industry: quote.industry.clone(),
            current_price: quote.current_price,
            market_cap: quote.market_cap,
            fundamentals: quote.fundamentals.clone(),
            ideal_range: quote.ideal_range(),
            history: history_from_dated(&quote.closes),
            result,
        }
    }
}
