//! Run configuration read from the environment

use std::env;
use std::time::Duration;

use crate::error::{PipelineError, Result};

pub const DEFAULT_WORKER_CONCURRENCY: usize = 10;
pub const DEFAULT_TASK_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 500;
pub const DEFAULT_CRYPTO_TOP_N: usize = 20;
pub const DEFAULT_NEWS_LIMIT: usize = 100;

pub const MAX_WORKER_CONCURRENCY: usize = 32;

pub const NIFTY_50_TICKERS: &[&str] = &[
    "ADANIENT.NS", "ADANIPORTS.NS", "APOLLOHOSP.NS", "ASIANPAINT.NS", "AXISBANK.NS",
    "BAJAJ-AUTO.NS", "BAJFINANCE.NS", "BAJAJFINSV.NS", "BPCL.NS", "BHARTIARTL.NS",
    "BRITANNIA.NS", "CIPLA.NS", "COALINDIA.NS", "DIVISLAB.NS", "DRREDDY.NS",
    "EICHERMOT.NS", "GRASIM.NS", "HCLTECH.NS", "HDFCBANK.NS", "HDFCLIFE.NS",
    "HEROMOTOCO.NS", "HINDALCO.NS", "HINDUNILVR.NS", "ICICIBANK.NS", "ITC.NS",
    "INDUSINDBK.NS", "INFY.NS", "JSWSTEEL.NS", "KOTAKBANK.NS", "LT.NS",
    "LTIM.NS", "M&M.NS", "MARUTI.NS", "NESTLEIND.NS", "NTPC.NS",
    "ONGC.NS", "POWERGRID.NS", "RELIANCE.NS", "SBILIFE.NS", "SBIN.NS",
    "SUNPHARMA.NS", "TCS.NS", "TATACONSUM.NS", "TATAMOTORS.NS", "TATASTEEL.NS",
    "TECHM.NS", "TITAN.NS", "ULTRACEMCO.NS", "UPL.NS", "WIPRO.NS",
];

pub const US_TICKERS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "TSLA", "META", "BRK-B", "V", "JNJ",
];

/// Deployment environment from `APP_ENV` (default `sandbox`)
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// Everything one report run needs besides its data sources
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub worker_concurrency: usize,
    pub task_timeout: Duration,
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub crypto_top_n: usize,
    pub news_limit: usize,
    pub nifty_tickers: Vec<String>,
    pub us_tickers: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            worker_concurrency: DEFAULT_WORKER_CONCURRENCY,
            task_timeout: Duration::from_secs(DEFAULT_TASK_TIMEOUT_SECONDS),
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
            crypto_top_n: DEFAULT_CRYPTO_TOP_N,
            news_limit: DEFAULT_NEWS_LIMIT,
            nifty_tickers: to_owned(NIFTY_50_TICKERS),
            us_tickers: to_owned(US_TICKERS),
        }
    }
}

impl PipelineConfig {
    /// Load from the process environment, reading `.env` first if present.
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str, default: u64| -> u64 {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        let tickers = |key: &str, default: &[&str]| -> Vec<String> {
            lookup(key)
                .map(|v| parse_ticker_list(&v))
                .filter(|list| !list.is_empty())
                .unwrap_or_else(|| to_owned(default))
        };

        Self {
            worker_concurrency: number("WORKER_CONCURRENCY", DEFAULT_WORKER_CONCURRENCY as u64)
                as usize,
            task_timeout: Duration::from_secs(number(
                "TASK_TIMEOUT_SECONDS",
                DEFAULT_TASK_TIMEOUT_SECONDS,
            )),
            batch_size: number("BATCH_SIZE", DEFAULT_BATCH_SIZE as u64) as usize,
            batch_delay: Duration::from_millis(number("BATCH_DELAY_MS", DEFAULT_BATCH_DELAY_MS)),
            crypto_top_n: number("CRYPTO_TOP_N", DEFAULT_CRYPTO_TOP_N as u64) as usize,
            news_limit: number("NEWS_LIMIT", DEFAULT_NEWS_LIMIT as u64) as usize,
            nifty_tickers: tickers("NIFTY_TICKERS", NIFTY_50_TICKERS),
            us_tickers: tickers("US_TICKERS", US_TICKERS),
        }
    }

    /// Reject settings that would stall the run
    pub fn validate(&self) -> Result<()> {
        if self.task_timeout.is_zero() {
            return Err(PipelineError::Config(
                "TASK_TIMEOUT_SECONDS must be > 0".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(PipelineError::Config("BATCH_SIZE must be > 0".to_string()));
        }
        Ok(())
    }

    /// Worker count clamped to 1..=32
    pub fn effective_concurrency(&self) -> usize {
        self.worker_concurrency.clamp(1, MAX_WORKER_CONCURRENCY)
    }
}

/// Split a comma-separated ticker list, dropping blanks
pub fn parse_ticker_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
