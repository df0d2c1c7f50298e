//! Rolling Z-score of the latest price

use crate::common::math;

pub const ZSCORE_PERIOD: u32 = 20;

/// Calculate Z-score
///
/// Z = (current - rolling mean) / rolling std, zero when the window is flat.
pub fn calculate_z_score(prices: &[f64], period: u32) -> f64 {
    let period = period as usize;
    if period == 0 || prices.len() < period {
        return 0.0;
    }

    let (Some(mean), Some(std)) = (math::sma(prices, period), math::rolling_std(prices, period))
    else {
        return 0.0;
    };

    if std == 0.0 {
        return 0.0;
    }

    let current = prices[prices.len() - 1];
    math::finite_or((current - mean) / std, 0.0)
}

/// Calculate Z-score with default period (20)
pub fn calculate_z_score_default(prices: &[f64]) -> f64 {
    calculate_z_score(prices, ZSCORE_PERIOD)
}
