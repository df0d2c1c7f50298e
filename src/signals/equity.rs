//! Fundamentals-only scorer for equities

use crate::models::fundamentals::FundamentalSet;
use crate::models::signal::{Recommendation, ScoreResult};

use super::scoring::ScoreCard;

pub const ROCE_EXCELLENT: f64 = 0.20;
pub const ROCE_GOOD: f64 = 0.15;
pub const EPS_GROWTH_STRONG: f64 = 0.15;
pub const DEBT_TO_EQUITY_LOW: f64 = 0.5;
pub const DEBT_TO_EQUITY_HIGH: f64 = 2.0;

pub struct EquityScorer;

impl EquityScorer {
    /// Score one equity. Missing or non-finite ratios fire no rule.
    pub fn score(fundamentals: &FundamentalSet) -> ScoreResult {
        let mut card = ScoreCard::new();

        if let Some(roce) = finite(fundamentals.roce) {
            if roce > ROCE_EXCELLENT {
                card.add("roce", 20, format!("Excellent ROCE ({:.1}%)", roce * 100.0));
            } else if roce > ROCE_GOOD {
                card.add("roce", 10, format!("Good ROCE ({:.1}%)", roce * 100.0));
            } else if roce < 0.0 {
                card.add("roce", -15, format!("Negative ROCE ({:.1}%)", roce * 100.0));
            }
        }

        if let Some(growth) = finite(fundamentals.eps_growth) {
            if growth > EPS_GROWTH_STRONG {
                card.add("eps_growth", 20, format!("Strong EPS growth ({:.1}%)", growth * 100.0));
            } else if growth < 0.0 {
                card.add("eps_growth", -10, format!("Shrinking EPS ({:.1}%)", growth * 100.0));
            }
        }

        if let Some(ratio) = finite(fundamentals.debt_to_equity) {
            if ratio < DEBT_TO_EQUITY_LOW {
                card.add("debt_to_equity", 15, format!("Low debt (D/E {:.2})", ratio));
            } else if ratio > DEBT_TO_EQUITY_HIGH {
                card.add("debt_to_equity", -15, format!("High debt (D/E {:.2})", ratio));
            }
        }

        card.finish(Self::recommendation)
    }

    /// Map a clamped score to its label
    pub fn recommendation(score: u8) -> Recommendation {
        match score {
            80..=100 => Recommendation::StrongBuy,
            60..=79 => Recommendation::Buy,
            40..=59 => Recommendation::Hold,
            _ => Recommendation::Avoid,
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
