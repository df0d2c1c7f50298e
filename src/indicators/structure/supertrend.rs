//! SuperTrend indicator, simplified

use crate::common::math;
use crate::models::indicators::TrendLabel;

pub const SUPERTREND_PERIOD: u32 = 10;
pub const SUPERTREND_MULTIPLIER: f64 = 3.0;

/// Calculate SuperTrend classification
///
/// Bands are rolling mean ± multiplier * rolling std (std stands in for ATR).
/// Above the upper band is Bullish, below the lower band Bearish.
pub fn calculate_supertrend(prices: &[f64], period: u32, multiplier: f64) -> TrendLabel {
    let period = period as usize;
    if period == 0 || prices.len() < period {
        return TrendLabel::Neutral;
    }

    let (Some(middle), Some(deviation)) =
        (math::sma(prices, period), math::rolling_std(prices, period))
    else {
        return TrendLabel::Neutral;
    };

    if deviation == 0.0 {
        return TrendLabel::Neutral;
    }

    let upper_band = middle + multiplier * deviation;
    let lower_band = middle - multiplier * deviation;
    let current_price = prices[prices.len() - 1];

    if current_price > upper_band {
        TrendLabel::Bullish
    } else if current_price < lower_band {
        TrendLabel::Bearish
    } else {
        TrendLabel::Neutral
    }
}

/// Calculate SuperTrend with default parameters (10, 3)
pub fn calculate_supertrend_default(prices: &[f64]) -> TrendLabel {
    calculate_supertrend(prices, SUPERTREND_PERIOD, SUPERTREND_MULTIPLIER)
}
