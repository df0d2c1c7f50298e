//! EMA (Exponential Moving Average) indicator

use crate::common::math;

pub const EMA_MEDIUM: u32 = 50;
pub const EMA_LONG: u32 = 200;

/// Calculate EMA for a specific period
///
/// Shorter series fall back to their simple mean.
pub fn calculate_ema(prices: &[f64], period: u32) -> f64 {
    let Some(mean) = math::mean(prices) else {
        return 0.0;
    };

    if prices.len() < period as usize {
        return mean;
    }

    match math::ema(prices, period as usize) {
        Some(value) if value.is_finite() => value,
        _ => prices[prices.len() - 1],
    }
}

/// Long-term trend EMA
///
/// EMA(200) when the series is long enough, otherwise an EMA over
/// `min(len, 50)` points so short sparklines still get a trend baseline.
pub fn calculate_long_ema(prices: &[f64]) -> f64 {
    if prices.len() >= EMA_LONG as usize {
        calculate_ema(prices, EMA_LONG)
    } else {
        calculate_ema(prices, prices.len().min(EMA_MEDIUM as usize) as u32)
    }
}

/// Percent distance of `price` from `ema`, zero when the EMA is not positive
pub fn distance_from_ema(price: f64, ema: f64) -> f64 {
    if ema > 0.0 {
        math::finite_or((price - ema) / ema * 100.0, 0.0)
    } else {
        0.0
    }
}
