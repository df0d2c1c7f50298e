//! Unit tests for MACD indicator

use marketlens::indicators::momentum::{calculate_macd, calculate_macd_default};
use marketlens::models::MacdIndicator;

#[test]
fn test_macd_insufficient_data() {
    let prices: Vec<f64> = (0..34).map(|i| 100.0 + i as f64).collect();
    assert_eq!(calculate_macd_default(&prices), MacdIndicator::default());
}

#[test]
fn test_macd_flat_series_is_zero() {
    let macd = calculate_macd_default(&[42.0; 200]);
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.signal, 0.0);
    assert_eq!(macd.histogram, 0.0);
}

#[test]
fn test_macd_uptrend() {
    let prices: Vec<f64> = (0..100).map(|i| 100.0 + i as f64 * 0.5).collect();
    let macd = calculate_macd_default(&prices);

    assert!(macd.macd > 0.0);
    assert!(macd.signal > 0.0);
    assert!(macd.histogram >= 0.0);
    assert!((macd.histogram - (macd.macd - macd.signal)).abs() < 1e-12);
}

#[test]
fn test_macd_custom_periods() {
    let prices: Vec<f64> = (0..20).map(|i| 200.0 - i as f64).collect();
    let macd = calculate_macd(&prices, 3, 6, 4);
    assert!(macd.macd < 0.0);
}
