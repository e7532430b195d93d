//! Risk levels and the score thresholds that derive them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Scores strictly above this are `CRITICAL`.
pub const CRITICAL_THRESHOLD: f64 = 80.0;

/// Scores strictly above this (and not critical) are `HIGH`.
pub const HIGH_THRESHOLD: f64 = 50.0;

/// Risk level label stored alongside every risk result.
///
/// `Medium` exists in the label space and in the histogram, but
/// [`RiskLevel::from_score`] never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Score above 80.
    Critical,
    /// Score above 50, at most 80.
    High,
    /// Reserved label with no score band.
    Medium,
    /// Score at most 50.
    Low,
}

impl RiskLevel {
    /// All levels in reporting order.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Derive the level for a score.
    ///
    /// TODO: the 30..=50 gap between the score bands and these thresholds means
    /// `Medium` is unreachable; replace once a real scoring model lands.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > CRITICAL_THRESHOLD {
            Self::Critical
        } else if score > HIGH_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }

    /// The label as persisted in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(Self::Critical),
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            other => Err(CoreError::UnknownRiskLevel(other.to_string())),
        }
    }
}
