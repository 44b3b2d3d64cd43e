//! Team Generation Output Structures
//!
//! Output of the balancing engine. All assignment and evaluation results
//! flow into `TeamGenerationResult`; derived team values (averages, counts)
//! are computed once after final assignment and read from here.

use super::Team;
use serde::{Deserialize, Serialize};

/// Final output of one balancing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamGenerationResult {
    /// Exactly `TEAM_COUNT` teams in index order (Team A, Team B, Team C).
    pub teams: Vec<Team>,
    /// Max team average rating minus min, rounded to one decimal.
    pub rating_gap: f64,
    pub balance_quality: BalanceQuality,
    /// Human-readable verdict, deterministic given the metrics.
    pub balance_message: String,
    /// Seed that produced this partition. Re-running with the same roster
    /// and this seed reproduces the result exactly.
    pub seed: u64,
}

/// Overall balance verdict for a generated set of teams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BalanceQuality {
    Excellent,
    Good,
    Fair,
}

impl BalanceQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceQuality::Excellent => "excellent",
            BalanceQuality::Good => "good",
            BalanceQuality::Fair => "fair",
        }
    }
}
