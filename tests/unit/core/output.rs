//! Unit tests for JSON output sanitisation

use chrono::{NaiveDate, TimeZone, Utc};
use marketlens::core::output::{sanitize, to_json_string, write_report};
use marketlens::models::{CoinQuote, MarketReport};
use marketlens::signals::SignalEngine;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct Sample {
    price: f64,
    series: Vec<f64>,
    maybe: Option<f64>,
    nested: Inner,
    name: String,
}

#[derive(Serialize)]
struct Inner {
    ratio: f64,
    count: u32,
}

#[test]
fn test_sanitize_replaces_non_finite_with_null() {
    let sample = Sample {
        price: f64::NAN,
        series: vec![1.5, f64::INFINITY, f64::NEG_INFINITY, -2.25],
        maybe: Some(f64::NAN),
        nested: Inner {
            ratio: f64::INFINITY,
            count: 7,
        },
        name: "BTC".to_string(),
    };
    let value = sanitize(&sample).unwrap();

    assert!(value["price"].is_null());
    assert_eq!(value["series"][0], 1.5);
    assert!(value["series"][1].is_null());
    assert!(value["series"][2].is_null());
    assert_eq!(value["series"][3], -2.25);
    assert!(value["maybe"].is_null());
    assert!(value["nested"]["ratio"].is_null());
    assert_eq!(value["nested"]["count"], 7);
    assert_eq!(value["name"], "BTC");
}

#[test]
fn test_to_json_string_is_valid_json() {
    let json = to_json_string(&vec![f64::NAN, 3.0]).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, serde_json::json!([null, 3.0]));
}

#[test]
fn test_write_report_sanitizes_nested_fields() {
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

    let coin = CoinQuote::new("bitcoin", "btc", 100.0).with_sparkline(vec![100.0; 120]);
    let mut entry = SignalEngine::evaluate_crypto(&coin, today);
    entry.indicators.z_score = f64::NAN;

    let mut report = MarketReport::empty(now);
    report.crypto.push(entry);

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report).unwrap();
    let parsed: Value = serde_json::from_slice(&buffer).unwrap();

    assert!(parsed["last_updated"].as_str().unwrap().starts_with("2024-03-31T12:00:00"));
    assert!(parsed["crypto"][0]["z_score"].is_null());
    assert_eq!(parsed["crypto"][0]["rsi"], 50.0);
    assert_eq!(parsed["crypto"][0]["score"], 50);
    assert_eq!(parsed["crypto"][0]["recommendation"], "Hold");
    assert_eq!(parsed["crypto"][0]["supertrend"], "Neutral");
    assert!(parsed["nifty_50"].as_array().unwrap().is_empty());
    assert!(parsed["news"].as_array().unwrap().is_empty());
}
