use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::error::{PipelineError, Result};

/// Maximum number of points kept for chart history
pub const MAX_HISTORY_POINTS: usize = 90;

/// Length of the synthetic series used when a sparkline is missing or too short
pub const FALLBACK_SERIES_LEN: usize = 90;

/// Chronological closing prices, oldest first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    /// Build a series, dropping non-finite points
    pub fn new(prices: Vec<f64>) -> Result<Self> {
        let prices: Vec<f64> = prices.into_iter().filter(|p| p.is_finite()).collect();
        if prices.is_empty() {
            return Err(PipelineError::EmptySeries);
        }
        Ok(Self(prices))
    }

    /// Constant series of `len` copies of `price`; a non-finite price becomes 0
    pub fn flat(price: f64, len: usize) -> Self {
        let price = math::finite_or(price, 0.0);
        Self(vec![price; len.max(1)])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

/// One chart point: `{time: "YYYY-MM-DD", value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub time: String,
    pub value: f64,
}

impl HistoryPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            time: date.format("%Y-%m-%d").to_string(),
            value,
        }
    }
}

/// Chart history from an undated sparkline.
///
/// Keeps the most recent points; point `i` of `k` is dated `today - (k - i)` days.
pub fn history_from_sparkline(prices: &[f64], today: NaiveDate) -> Vec<HistoryPoint> {
    let days_back = prices.len().min(MAX_HISTORY_POINTS);
    prices[prices.len() - days_back..]
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let date = today - Duration::days((days_back - i) as i64);
            HistoryPoint::new(date, price)
        })
        .collect()
}

/// Chart history from dated closes, keeping the last points
pub fn history_from_dated(points: &[(NaiveDate, f64)]) -> Vec<HistoryPoint> {
    let start = points.len().saturating_sub(MAX_HISTORY_POINTS);
    points[start..]
        .iter()
        .map(|&(date, close)| HistoryPoint::new(date, close))
        .collect()
}
