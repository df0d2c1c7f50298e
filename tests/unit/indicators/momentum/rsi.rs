//! Unit tests for RSI indicator

use marketlens::indicators::momentum::{calculate_rsi, calculate_rsi_default, RSI_NEUTRAL};

#[test]
fn test_rsi_insufficient_data() {
    assert_eq!(calculate_rsi_default(&[100.0; 14]), RSI_NEUTRAL);
    assert_eq!(calculate_rsi_default(&[]), RSI_NEUTRAL);
}

#[test]
fn test_rsi_flat_series_is_neutral() {
    assert_eq!(calculate_rsi_default(&[250.0; 200]), 50.0);
}

#[test]
fn test_rsi_known_value() {
    // +1, -1, +2 => avg gain 1, avg loss 1/3, RS 3
    let rsi = calculate_rsi(&[44.0, 45.0, 44.0, 46.0], 3);
    assert!((rsi - 75.0).abs() < 1e-9);
}

#[test]
fn test_rsi_extremes() {
    let rising: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let falling: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    assert_eq!(calculate_rsi_default(&rising), 100.0);
    assert_eq!(calculate_rsi_default(&falling), 0.0);
}

#[test]
fn test_rsi_stays_in_range() {
    let prices: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 15.0 + i as f64 * 0.05)
        .collect();
    for end in 1..=prices.len() {
        let rsi = calculate_rsi_default(&prices[..end]);
        assert!((0.0..=100.0).contains(&rsi), "rsi {} out of range", rsi);
    }
}
