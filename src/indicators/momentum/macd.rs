//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;

pub const MACD_FAST: u32 = 12;
pub const MACD_SLOW: u32 = 26;
pub const MACD_SIGNAL: u32 = 9;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// Needs `slow + signal` points, otherwise all three values are zero.
pub fn calculate_macd(
    prices: &[f64],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdIndicator {
    if prices.len() < slow_period as usize + signal_period as usize {
        return MacdIndicator::default();
    }

    let fast_ema = math::ema_series(prices, fast_period as usize);
    let slow_ema = math::ema_series(prices, slow_period as usize);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = math::ema_series(&macd_line, signal_period as usize);

    let macd = macd_line.last().copied().unwrap_or(0.0);
    let signal = signal_line.last().copied().unwrap_or(0.0);

    MacdIndicator {
        macd: math::finite_or(macd, 0.0),
        signal: math::finite_or(signal, 0.0),
        histogram: math::finite_or(macd - signal, 0.0),
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &[f64]) -> MacdIndicator {
    calculate_macd(prices, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}
