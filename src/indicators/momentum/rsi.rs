//! RSI (Relative Strength Index) indicator

use crate::common::math;

pub const RSI_PERIOD: u32 = 14;

/// Returned when the window is too short or flat
pub const RSI_NEUTRAL: f64 = 50.0;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss over the last `period` price changes
pub fn calculate_rsi(prices: &[f64], period: u32) -> f64 {
    let period = period as usize;
    if period == 0 || prices.len() < period + 1 {
        return RSI_NEUTRAL;
    }

    let window = &prices[prices.len() - period - 1..];
    let mut gains = 0.0;
    let mut losses = 0.0;

    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        // No losses: flat window is neutral, pure gains saturate
        return if avg_gain == 0.0 { RSI_NEUTRAL } else { 100.0 };
    }

    let rs = avg_gain / avg_loss;
    math::finite_or(100.0 - (100.0 / (1.0 + rs)), RSI_NEUTRAL)
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> f64 {
    calculate_rsi(prices, RSI_PERIOD)
}
