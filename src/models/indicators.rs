use serde::{Deserialize, Serialize};

/// Categorical trend read-out used by SuperTrend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrendLabel {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl std::fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TrendLabel::Bullish => "Bullish",
            TrendLabel::Bearish => "Bearish",
            TrendLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// MACD sign combined with price position against the 200-period EMA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdTrend {
    #[serde(rename = "BULLISH ABOVE")]
    BullishAbove,
    #[serde(rename = "BULLISH BELOW")]
    BullishBelow,
    #[serde(rename = "BEARISH ABOVE")]
    BearishAbove,
    #[serde(rename = "BEARISH BELOW")]
    BearishBelow,
}

impl MacdTrend {
    pub fn classify(macd: f64, price: f64, ema_200: f64) -> Self {
        if macd > 0.0 && price > ema_200 {
            MacdTrend::BullishAbove
        } else if macd > 0.0 && price < ema_200 {
            MacdTrend::BullishBelow
        } else if macd < 0.0 && price > ema_200 {
            MacdTrend::BearishAbove
        } else {
            MacdTrend::BearishBelow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Most recent value of every indicator computed from one price snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub macd_slope: f64,
    pub macd_vs_200ema: MacdTrend,
    pub adx: f64,
    pub cmf: f64,
    pub ema_50: f64,
    pub ema_200: f64,
    pub distance_from_200ema: f64,
    pub supertrend: TrendLabel,
    pub z_score: f64,
    pub squeeze_momentum: f64,
    pub squeeze_on: bool,
}
