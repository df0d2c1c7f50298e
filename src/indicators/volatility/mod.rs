//! Volatility indicators: Z-score

pub mod zscore;

pub use zscore::*;
