pub mod market_data;
pub mod news;

pub use market_data::{CryptoSource, EquitySource, NewsSource, PlaceholderSource};
