//! Unit tests for simplified CMF

use marketlens::indicators::volume::{calculate_cmf, calculate_cmf_default};

#[test]
fn test_cmf_insufficient_data() {
    let prices: Vec<f64> = (0..19).map(|i| 100.0 + i as f64).collect();
    assert_eq!(calculate_cmf_default(&prices), 0.0);
}

#[test]
fn test_cmf_flat_series_is_zero() {
    assert_eq!(calculate_cmf_default(&[100.0; 90]), 0.0);
}

#[test]
fn test_cmf_monotonic_series_hit_clamps() {
    let rising: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let falling: Vec<f64> = (0..40).map(|i| 100.0 - i as f64).collect();
    assert_eq!(calculate_cmf_default(&rising), 1.0);
    assert_eq!(calculate_cmf_default(&falling), -1.0);
}

#[test]
fn test_cmf_within_bounds() {
    let prices: Vec<f64> = (0..90).map(|i| 50.0 + (i as f64 * 1.3).cos() * 8.0).collect();
    for end in 0..=prices.len() {
        let cmf = calculate_cmf(&prices[..end], 20);
        assert!((-1.0..=1.0).contains(&cmf));
    }
}
