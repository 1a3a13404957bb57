//! Scoring output models

use serde::{Deserialize, Serialize};

use crate::models::indicators::Snapshot;

/// Short tag identifying which rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonTag {
    Uptrend,
    Oversold,
    HealthyMomentum,
    AboveAverageVolume,
    Breakout,
}

impl ReasonTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonTag::Uptrend => "uptrend",
            ReasonTag::Oversold => "oversold",
            ReasonTag::HealthyMomentum => "healthy-momentum",
            ReasonTag::AboveAverageVolume => "above-average-volume",
            ReasonTag::Breakout => "breakout",
        }
    }
}

impl std::fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fired rule: tag, human-readable description, and the points it added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReason {
    pub tag: ReasonTag,
    pub description: String,
    pub delta: i32,
}

/// Result of scoring one asset. Created fresh per call, never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: i32,
    pub reasons: Vec<ScoreReason>,
    pub snapshot: Snapshot,
}
