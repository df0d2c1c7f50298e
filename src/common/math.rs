//! Numeric helpers shared by the indicator library

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average of the trailing `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

/// Sample standard deviation (n - 1 denominator).
///
/// A constant window is exactly 0, even when its summed mean is off by an ulp.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    if values.iter().all(|v| *v == values[0]) {
        return Some(0.0);
    }
    let avg = mean(values)?;
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Sample standard deviation of the trailing `period` values
pub fn rolling_std(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    sample_std(&values[values.len() - period..])
}

/// Smoothing factor for an EMA of the given span
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Full EMA series seeded by the first value, no bias adjustment.
///
/// Updated as `ema += alpha * (x - ema)` so a constant input stays exactly constant.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = ema_alpha(period.max(1));
    let mut out = Vec::with_capacity(values.len());
    let mut iter = values.iter();

    if let Some(&first) = iter.next() {
        let mut ema = first;
        out.push(ema);
        for &value in iter {
            ema += alpha * (value - ema);
            out.push(ema);
        }
    }

    out
}

/// Last value of the EMA series
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}

/// Percent change from `from` to `to` as a fraction (0.05 = +5%)
pub fn pct_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 || !from.is_finite() || !to.is_finite() {
        return None;
    }
    Some((to - from) / from)
}

/// Replace NaN and infinities with `default`
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}
