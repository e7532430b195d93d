//! Read models served by the query layer.

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// One row of the recent-activity feed.
///
/// This shape is the read contract shared with the dashboard and the desktop
/// viewer, so field names are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Transaction id the risk result refers to.
    pub id: i64,
    /// Transaction amount.
    pub amount: f64,
    /// Risk score.
    pub score: f64,
    /// Risk level label as stored.
    pub level: String,
    /// Reason recorded with the risk result.
    pub reason: Option<String>,
    /// Whether an analyst reviewed the result.
    pub reviewed: bool,
    /// Transaction timestamp as stored.
    pub timestamp: Option<String>,
    /// Transaction location.
    pub location: Option<String>,
    /// Vendor category, absent when the vendor row is missing.
    pub category: Option<String>,
}

/// Count of risk results per level.
///
/// All four levels are always present when serialized, defaulting to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskHistogram {
    /// `CRITICAL` results.
    #[serde(rename = "CRITICAL")]
    pub critical: u64,
    /// `HIGH` results.
    #[serde(rename = "HIGH")]
    pub high: u64,
    /// `MEDIUM` results.
    #[serde(rename = "MEDIUM")]
    pub medium: u64,
    /// `LOW` results.
    #[serde(rename = "LOW")]
    pub low: u64,
}

impl RiskHistogram {
    /// Add `count` results at `level`.
    pub fn record(&mut self, level: RiskLevel, count: u64) {
        *self.slot(level) += count;
    }

    /// Count for a single level.
    #[must_use]
    pub fn get(&self, level: RiskLevel) -> u64 {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    /// Total across all levels.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low
    }

    fn slot(&mut self, level: RiskLevel) -> &mut u64 {
        match level {
            RiskLevel::Critical => &mut self.critical,
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram_serializes_all_levels() {
        let json = serde_json::to_value(RiskHistogram::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"CRITICAL": 0, "HIGH": 0, "MEDIUM": 0, "LOW": 0})
        );
    }

    #[test]
    fn record_accumulates_per_level() {
        let mut histogram = RiskHistogram::default();
        histogram.record(RiskLevel::High, 3);
        histogram.record(RiskLevel::High, 2);
        histogram.record(RiskLevel::Low, 7);

        assert_eq!(histogram.get(RiskLevel::High), 5);
        assert_eq!(histogram.get(RiskLevel::Low), 7);
        assert_eq!(histogram.get(RiskLevel::Medium), 0);
        assert_eq!(histogram.total(), 12);
    }

    #[test]
    fn feed_entry_uses_dashboard_field_names() {
        let entry = FeedEntry {
            id: 7,
            amount: 120.5,
            score: 12.0,
            level: "LOW".into(),
            reason: Some("Normal Activity".into()),
            reviewed: false,
            timestamp: Some("2024-03-15 10:00:00".into()),
            location: Some("Tokyo".into()),
            category: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        for key in [
            "id", "amount", "score", "level", "reason", "reviewed", "timestamp", "location",
            "category",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["category"].is_null());
    }
}
