//! Indicator registry: runs every indicator over one price snapshot

use crate::models::indicators::{IndicatorSet, MacdTrend};
use crate::models::series::PriceSeries;

use super::momentum::{calculate_macd_default, calculate_rsi_default, calculate_squeeze_momentum_default};
use super::structure::calculate_supertrend_default;
use super::trend::{calculate_adx_default, calculate_ema, calculate_long_ema, distance_from_ema, EMA_MEDIUM};
use super::volatility::calculate_z_score_default;
use super::volume::calculate_cmf_default;

/// Compute the full indicator set with default windows.
///
/// `current_price` is the quoted price, which can differ from the last
/// sparkline point; it drives the 200-EMA distance and MACD position label.
pub fn compute_indicator_set(series: &PriceSeries, current_price: f64) -> IndicatorSet {
    let prices = series.as_slice();

    let macd = calculate_macd_default(prices);
    let squeeze = calculate_squeeze_momentum_default(prices);
    let ema_50 = calculate_ema(prices, EMA_MEDIUM);
    let ema_200 = calculate_long_ema(prices);

    IndicatorSet {
        rsi: calculate_rsi_default(prices),
        macd: macd.macd,
        macd_signal: macd.signal,
        macd_histogram: macd.histogram,
        macd_slope: macd.histogram,
        macd_vs_200ema: MacdTrend::classify(macd.macd, current_price, ema_200),
        adx: calculate_adx_default(prices),
        cmf: calculate_cmf_default(prices),
        ema_50,
        ema_200,
        distance_from_200ema: distance_from_ema(current_price, ema_200),
        supertrend: calculate_supertrend_default(prices),
        z_score: calculate_z_score_default(prices),
        squeeze_momentum: squeeze.momentum,
        squeeze_on: squeeze.squeeze_on,
    }
}
