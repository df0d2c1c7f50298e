//! CMF (Chaikin Money Flow), simplified
//!
//! Without volume, buying pressure is read from where each price sits inside
//! its rolling min/max range, averaged and recentred onto -1..=1.

use crate::common::math;

pub const CMF_PERIOD: u32 = 20;

/// Calculate simplified CMF
///
/// Position = (x - min) / (max - min) for every full window, a zero-width
/// window counting as the midpoint. CMF = (mean of the last `period`
/// positions - 0.5) * 2, clamped to -1..=1.
pub fn calculate_cmf(prices: &[f64], period: u32) -> f64 {
    let period = period as usize;
    if period == 0 || prices.len() < period {
        return 0.0;
    }

    let positions: Vec<f64> = (period..=prices.len())
        .map(|end| {
            let window = &prices[end - period..end];
            let low = window.iter().copied().fold(f64::INFINITY, f64::min);
            let high = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = high - low;
            if range > 0.0 {
                (prices[end - 1] - low) / range
            } else {
                0.5
            }
        })
        .collect();

    let recent = &positions[positions.len().saturating_sub(period)..];
    let money_flow = math::mean(recent).unwrap_or(0.5);

    math::finite_or((money_flow - 0.5) * 2.0, 0.0).clamp(-1.0, 1.0)
}

/// Calculate CMF with default period (20)
pub fn calculate_cmf_default(prices: &[f64]) -> f64 {
    calculate_cmf(prices, CMF_PERIOD)
}
