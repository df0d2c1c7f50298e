//! Score accumulation shared by the equity and crypto scorers

use crate::models::signal::{Recommendation, RuleHit, ScoreResult, MAX_REASONS};

/// Neutral starting point of every score
pub const BASELINE_SCORE: i32 = 50;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Running total of independent threshold rules.
///
/// Rules never short-circuit each other: every hit is summed, and the total
/// is clamped only once, in [`ScoreCard::finish`].
#[derive(Debug, Clone)]
pub struct ScoreCard {
    total: i32,
    hits: Vec<RuleHit>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self {
            total: BASELINE_SCORE,
            hits: Vec::new(),
        }
    }

    /// Record a rule that fired
    pub fn add(&mut self, rule: &str, delta: i32, reason: impl Into<String>) {
        self.total += delta;
        self.hits.push(RuleHit::new(rule, delta, reason));
    }

    /// Record an observation that does not move the score
    pub fn note(&mut self, rule: &str, reason: impl Into<String>) {
        self.add(rule, 0, reason);
    }

    /// Clamp, label and collect the first reasons of the scoring-relevant hits
    pub fn finish(self, label: impl Fn(u8) -> Recommendation) -> ScoreResult {
        let score = clamp_score(self.total);
        let reasons = self
            .hits
            .iter()
            .filter(|hit| hit.delta != 0)
            .take(MAX_REASONS)
            .map(|hit| hit.reason.clone())
            .collect();

        ScoreResult {
            score,
            recommendation: label(score),
            reasons,
            breakdown: self.hits,
        }
    }
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a summed score into 0..=100
pub fn clamp_score(total: i32) -> u8 {
    total.clamp(MIN_SCORE, MAX_SCORE) as u8
}
