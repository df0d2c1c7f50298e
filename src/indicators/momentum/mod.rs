//! Momentum indicators: RSI, MACD, Squeeze

pub mod macd;
pub mod rsi;
pub mod squeeze;

pub use macd::*;
pub use rsi::*;
pub use squeeze::*;
