//! Technical scorer for crypto assets.
//!
//! High score means bullish: oversold momentum, price above its long trend,
//! positive money flow and a confirmed SuperTrend all push the score up.

use crate::models::indicators::{IndicatorSet, TrendLabel};
use crate::models::signal::{Recommendation, ScoreResult};

use super::scoring::ScoreCard;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_WEAK: f64 = 40.0;
pub const RSI_STRONG: f64 = 60.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

pub const ADX_STRONG_TREND: f64 = 25.0;
pub const ADX_DEVELOPING_TREND: f64 = 20.0;

pub const CMF_STRONG_INFLOW: f64 = 0.1;
pub const CMF_STRONG_OUTFLOW: f64 = -0.1;

pub const Z_SCORE_EXTREME: f64 = 2.0;

/// Percent thresholds for the price-change rule
pub const MONTHLY_CHANGE_THRESHOLD: f64 = 20.0;
pub const DAILY_CHANGE_THRESHOLD: f64 = 10.0;

/// Recent price performance in percent (5.0 = +5%)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceChanges {
    pub change_24h: Option<f64>,
    pub change_1m: Option<f64>,
}

/// Everything the crypto scorer reads for one coin
#[derive(Debug, Clone, Copy)]
pub struct CryptoInputs<'a> {
    pub current_price: f64,
    pub indicators: &'a IndicatorSet,
    pub changes: PriceChanges,
}

pub struct CryptoScorer;

impl CryptoScorer {
    /// Score one coin from its indicator snapshot
    pub fn score(inputs: &CryptoInputs<'_>) -> ScoreResult {
        let ind = inputs.indicators;
        let price = inputs.current_price;
        let mut card = ScoreCard::new();

        if ind.rsi < RSI_OVERSOLD {
            card.add("rsi", 20, format!("RSI oversold ({:.1})", ind.rsi));
        } else if ind.rsi < RSI_WEAK {
            card.add("rsi", 10, format!("RSI approaching oversold ({:.1})", ind.rsi));
        } else if ind.rsi > RSI_OVERBOUGHT {
            card.add("rsi", -15, format!("RSI overbought ({:.1})", ind.rsi));
        } else if ind.rsi > RSI_STRONG {
            card.add("rsi", -5, format!("RSI elevated ({:.1})", ind.rsi));
        }

        if ind.macd > ind.macd_signal && ind.macd_histogram > 0.0 {
            card.add("macd", 15, "MACD bullish crossover");
        } else if ind.macd > 0.0 {
            card.add("macd", 5, "MACD positive");
        } else if ind.macd < ind.macd_signal {
            card.add("macd", -10, "MACD bearish");
        }

        if price > ind.ema_50 && ind.ema_50 > ind.ema_200 {
            card.add("ema_trend", 15, "Strong uptrend (price > EMA50 > EMA200)");
        } else if price > ind.ema_200 {
            card.add(
                "ema_trend",
                8,
                format!("Above 200 EMA ({:+.1}%)", ind.distance_from_200ema),
            );
        } else if price < ind.ema_200 {
            card.add(
                "ema_trend",
                -10,
                format!("Below 200 EMA ({:+.1}%)", ind.distance_from_200ema),
            );
        }

        if ind.adx > ADX_STRONG_TREND {
            card.add("adx", 10, format!("Strong trend (ADX {:.1})", ind.adx));
        } else if ind.adx > ADX_DEVELOPING_TREND {
            card.add("adx", 5, format!("Developing trend (ADX {:.1})", ind.adx));
        }

        if ind.cmf > CMF_STRONG_INFLOW {
            card.add("cmf", 10, "Strong buying pressure");
        } else if ind.cmf > 0.0 {
            card.add("cmf", 5, "Positive money flow");
        } else if ind.cmf < CMF_STRONG_OUTFLOW {
            card.add("cmf", -10, "Selling pressure");
        }

        match ind.supertrend {
            TrendLabel::Bullish => card.add("supertrend", 10, "SuperTrend bullish"),
            TrendLabel::Bearish => card.add("supertrend", -10, "SuperTrend bearish"),
            TrendLabel::Neutral => {}
        }

        if ind.z_score < -Z_SCORE_EXTREME {
            card.add("z_score", 5, format!("Stretched below mean (z {:.2})", ind.z_score));
        } else if ind.z_score > Z_SCORE_EXTREME {
            card.add("z_score", -5, format!("Stretched above mean (z {:.2})", ind.z_score));
        }

        Self::score_price_change(&mut card, inputs.changes);

        card.note(
            "squeeze",
            if ind.squeeze_on {
                format!("Squeeze on (momentum {:+.2})", ind.squeeze_momentum)
            } else {
                format!("Squeeze off (momentum {:+.2})", ind.squeeze_momentum)
            },
        );

        card.finish(Self::recommendation)
    }

    fn score_price_change(card: &mut ScoreCard, changes: PriceChanges) {
        let monthly = changes.change_1m.filter(|c| c.is_finite());
        let daily = changes.change_24h.filter(|c| c.is_finite());

        if let Some(change) = monthly {
            if change > MONTHLY_CHANGE_THRESHOLD {
                card.add("price_change", 5, format!("Strong monthly gain ({:+.1}%)", change));
            } else if change < -MONTHLY_CHANGE_THRESHOLD {
                card.add("price_change", -5, format!("Heavy monthly loss ({:+.1}%)", change));
            }
        } else if let Some(change) = daily {
            if change > DAILY_CHANGE_THRESHOLD {
                card.add("price_change", 5, format!("Strong 24h gain ({:+.1}%)", change));
            } else if change < -DAILY_CHANGE_THRESHOLD {
                card.add("price_change", -5, format!("Heavy 24h loss ({:+.1}%)", change));
            }
        }
    }

    /// Map a clamped score to its label
    pub fn recommendation(score: u8) -> Recommendation {
        match score {
            80..=100 => Recommendation::StrongBuy,
            65..=79 => Recommendation::Buy,
            45..=64 => Recommendation::Hold,
            30..=44 => Recommendation::Wait,
            _ => Recommendation::Avoid,
        }
    }
}
