//! Signal evaluation: rule-based scorers and the engine that drives them.

pub mod crypto;
pub mod engine;
pub mod equity;
pub mod scoring;

pub use crypto::{CryptoInputs, CryptoScorer, PriceChanges};
pub use engine::SignalEngine;
pub use equity::EquityScorer;
pub use scoring::*;
