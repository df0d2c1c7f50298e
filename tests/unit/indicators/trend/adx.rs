//! Unit tests for simplified ADX

use marketlens::indicators::trend::{calculate_adx_default, ADX_NEUTRAL};

#[test]
fn test_adx_insufficient_data() {
    let prices: Vec<f64> = (0..27).map(|i| 100.0 + i as f64).collect();
    assert_eq!(calculate_adx_default(&prices), ADX_NEUTRAL);
}

#[test]
fn test_adx_flat_series_has_no_trend() {
    assert_eq!(calculate_adx_default(&[10.0; 60]), 0.0);
}

#[test]
fn test_adx_constant_returns() {
    // Steady 1% moves => mean |return| 0.01 => 5
    let prices: Vec<f64> = (0..40).map(|i| 100.0 * 1.01f64.powi(i)).collect();
    assert!((calculate_adx_default(&prices) - 5.0).abs() < 1e-6);
}

#[test]
fn test_adx_clamped_to_100() {
    let prices: Vec<f64> = (0..40).map(|i| if i % 2 == 0 { 100.0 } else { 150.0 }).collect();
    assert_eq!(calculate_adx_default(&prices), 100.0);
}
