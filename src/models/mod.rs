//! Shared data models spanning the pipeline layers.

pub mod fundamentals;
pub mod indicators;
pub mod quotes;
pub mod report;
pub mod series;
pub mod signal;

pub use fundamentals::FundamentalSet;
pub use indicators::{IndicatorSet, MacdIndicator, MacdTrend, TrendLabel};
pub use quotes::{CoinQuote, EquityQuote, RawArticle};
pub use report::{CryptoReport, EquityReport, MarketReport, NewsArticle};
pub use series::{history_from_dated, history_from_sparkline, HistoryPoint, PriceSeries};
pub use signal::{Recommendation, RuleHit, ScoreResult, MAX_REASONS};
