//! Squeeze Momentum (simplified)
//!
//! Bollinger width is compared against a Keltner proxy built from the same
//! rolling deviation, since the sparkline carries no high/low range.

use crate::common::math;

pub const SQUEEZE_PERIOD: u32 = 20;

/// Keltner channel width as a multiple of the rolling deviation
pub const KELTNER_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SqueezeMomentum {
    /// Percent change over the window, halved when the squeeze is off
    pub momentum: f64,
    pub squeeze_on: bool,
}

/// Calculate squeeze momentum
///
/// Needs `period + 1` points for the `period`-step percent change.
pub fn calculate_squeeze_momentum(prices: &[f64], period: u32) -> SqueezeMomentum {
    let period = period as usize;
    if period == 0 || prices.len() <= period {
        return SqueezeMomentum::default();
    }

    let bb_std = math::rolling_std(prices, period).unwrap_or(0.0);
    let kc_width = bb_std * KELTNER_MULTIPLIER;
    let squeeze_on = bb_std < kc_width;

    let current = prices[prices.len() - 1];
    let base = prices[prices.len() - 1 - period];
    let momentum = math::pct_change(base, current).unwrap_or(0.0) * 100.0;
    let momentum = if squeeze_on { momentum } else { momentum * 0.5 };

    SqueezeMomentum {
        momentum: math::finite_or(momentum, 0.0),
        squeeze_on,
    }
}

/// Calculate squeeze momentum with default period (20)
pub fn calculate_squeeze_momentum_default(prices: &[f64]) -> SqueezeMomentum {
    calculate_squeeze_momentum(prices, SQUEEZE_PERIOD)
}
