//! ADX (Average Directional Index), simplified
//!
//! Not the directional-movement ADX: trend strength is approximated by the
//! mean absolute percentage return, scaled and clamped to 0..=100.

use crate::common::math;

pub const ADX_PERIOD: u32 = 14;
pub const ADX_NEUTRAL: f64 = 25.0;

/// Multiplier mapping mean |return| onto the 0-100 range
pub const ADX_SCALE: f64 = 500.0;

/// Calculate simplified ADX
///
/// Needs `2 * period` points, otherwise returns the neutral 25.
pub fn calculate_adx(prices: &[f64], period: u32) -> f64 {
    let period = period as usize;
    if period == 0 || prices.len() < period * 2 {
        return ADX_NEUTRAL;
    }

    let window = &prices[prices.len() - period - 1..];
    let abs_returns: Vec<f64> = window
        .windows(2)
        .map(|pair| math::pct_change(pair[0], pair[1]).unwrap_or(0.0).abs())
        .collect();

    let directional_movement = math::mean(&abs_returns).unwrap_or(0.0);
    math::finite_or(directional_movement * ADX_SCALE, ADX_NEUTRAL).clamp(0.0, 100.0)
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(prices: &[f64]) -> f64 {
    calculate_adx(prices, ADX_PERIOD)
}
