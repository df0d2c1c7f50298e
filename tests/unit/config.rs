//! Unit tests for pipeline configuration

use std::collections::HashMap;
use std::time::Duration;

use marketlens::config::{parse_ticker_list, PipelineConfig, NIFTY_50_TICKERS, US_TICKERS};
use marketlens::PipelineError;

fn config_from(pairs: &[(&str, &str)]) -> PipelineConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PipelineConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]);
    assert_eq!(config, PipelineConfig::default());
    assert_eq!(config.worker_concurrency, 10);
    assert_eq!(config.task_timeout, Duration::from_secs(15));
    assert_eq!(config.batch_size, 10);
    assert_eq!(config.batch_delay, Duration::from_millis(500));
    assert_eq!(config.crypto_top_n, 20);
    assert_eq!(config.news_limit, 100);
    assert_eq!(config.nifty_tickers.len(), NIFTY_50_TICKERS.len());
    assert_eq!(config.us_tickers.len(), US_TICKERS.len());
}

#[test]
fn test_overrides_and_bad_values() {
    let config = config_from(&[
        ("WORKER_CONCURRENCY", "4"),
        ("TASK_TIMEOUT_SECONDS", "not-a-number"),
        ("BATCH_DELAY_MS", " 0 "),
        ("US_TICKERS", "aapl, msft,,"),
        ("NIFTY_TICKERS", " , "),
    ]);

    assert_eq!(config.worker_concurrency, 4);
    assert_eq!(config.task_timeout, Duration::from_secs(15));
    assert_eq!(config.batch_delay, Duration::ZERO);
    assert_eq!(config.us_tickers, vec!["AAPL".to_string(), "MSFT".to_string()]);
    assert_eq!(config.nifty_tickers.len(), NIFTY_50_TICKERS.len());
}

#[test]
fn test_validate_rejects_zero_batch() {
    let config = config_from(&[("BATCH_SIZE", "0")]);
    assert!(matches!(config.validate(), Err(PipelineError::Config(_))));

    let config = config_from(&[("TASK_TIMEOUT_SECONDS", "0")]);
    assert!(matches!(config.validate(), Err(PipelineError::Config(_))));

    assert!(PipelineConfig::default().validate().is_ok());
}

#[test]
fn test_effective_concurrency_clamped() {
    assert_eq!(config_from(&[("WORKER_CONCURRENCY", "0")]).effective_concurrency(), 1);
    assert_eq!(config_from(&[("WORKER_CONCURRENCY", "64")]).effective_concurrency(), 32);
}

#[test]
fn test_parse_ticker_list() {
    assert_eq!(parse_ticker_list("tcs.ns,INFY.NS"), vec!["TCS.NS", "INFY.NS"]);
    assert!(parse_ticker_list("").is_empty());
}
