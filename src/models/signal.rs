use serde::{Deserialize, Serialize};

/// Maximum number of reasons attached to a score
pub const MAX_REASONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Wait,
    Avoid,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Wait => "Wait",
            Recommendation::Avoid => "Avoid",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One threshold rule that matched, with its signed contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: String,
    pub delta: i32,
    pub reason: String,
}

impl RuleHit {
    pub fn new(rule: &str, delta: i32, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            delta,
            reason: reason.into(),
        }
    }
}

/// Final classification of one instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub recommendation: Recommendation,
    pub reasons: Vec<String>,
    #[serde(rename = "score_breakdown", skip_serializing_if = "Vec::is_empty", default)]
    pub breakdown: Vec<RuleHit>,
}
