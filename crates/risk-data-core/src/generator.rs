//! Synthetic transaction and risk-result generation.
//!
//! Each [`SyntheticEvent`] is one transaction plus the risk result derived
//! for it. Drawing is pure: callers pass the RNG and the generation instant,
//! which keeps batches reproducible under a seeded RNG.

use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::reference::{SEED_CUSTOMERS, SEED_LOCATIONS, SEED_VENDORS};
use crate::risk::RiskLevel;

// ============================================================================
// Constants
// ============================================================================

/// Probability that an event is flagged risky.
pub const RISKY_PROBABILITY: f64 = 0.2;

/// Amount multiplier applied to risky events.
pub const RISKY_AMOUNT_MULTIPLIER: f64 = 3.0;

/// Base amount range, before the risky multiplier.
pub const BASE_AMOUNT_MIN: f64 = 10.0;
/// Exclusive upper bound of the base amount.
pub const BASE_AMOUNT_MAX: f64 = 5010.0;

/// Score band for risky events.
pub const RISKY_SCORE_MIN: f64 = 60.0;
/// Exclusive upper bound of the risky score band.
pub const RISKY_SCORE_MAX: f64 = 100.0;

/// Exclusive upper bound of the normal score band (which starts at zero).
pub const NORMAL_SCORE_MAX: f64 = 30.0;

/// Width of the trailing window timestamps are drawn from.
pub const TIMESTAMP_WINDOW_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Status of every generated transaction.
pub const TRANSACTION_STATUS: &str = "completed";

/// Reason recorded for risky events.
pub const RISKY_REASON: &str = "High Value / Suspicious Loc";

/// Reason recorded for normal events.
pub const NORMAL_REASON: &str = "Normal Activity";

/// Fraud probability written at generation time. Reserved for downstream analysis.
pub const INITIAL_FRAUD_PROBABILITY: f64 = 0.0;

/// One generated transaction and its risk result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticEvent {
    /// Customer id from the seed universe.
    pub customer_id: i64,
    /// Vendor id from the seed universe.
    pub vendor_id: i64,
    /// Transaction amount, rounded to cents.
    pub amount: f64,
    /// Shared timestamp of the transaction and its risk result.
    pub timestamp: NaiveDateTime,
    /// Origin location.
    pub location: &'static str,
    /// Whether the event was flagged risky.
    pub risky: bool,
    /// Heuristic risk score.
    pub risk_score: f64,
    /// Level derived from `risk_score`.
    pub risk_level: RiskLevel,
    /// Free-text reason.
    pub reason: &'static str,
}

impl SyntheticEvent {
    /// Transaction status written for this event.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        TRANSACTION_STATUS
    }

    /// Fraud probability written for this event.
    #[must_use]
    pub const fn fraud_probability(&self) -> f64 {
        INITIAL_FRAUD_PROBABILITY
    }
}

/// Draw a single event relative to `now`.
///
/// Draw order: customer, vendor, base amount, risky flag, timestamp, location, score.
pub fn draw_event<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> SyntheticEvent {
    let customer_id = SEED_CUSTOMERS
        .choose(rng)
        .map_or(SEED_CUSTOMERS[0].id, |c| c.id);
    let vendor_id = SEED_VENDORS.choose(rng).map_or(SEED_VENDORS[0].id, |v| v.id);

    let mut amount = rng.gen_range(BASE_AMOUNT_MIN..BASE_AMOUNT_MAX);
    let risky = rng.gen_bool(RISKY_PROBABILITY);
    if risky {
        amount *= RISKY_AMOUNT_MULTIPLIER;
    }

    let offset = Duration::seconds(rng.gen_range(0..TIMESTAMP_WINDOW_SECONDS));
    let timestamp = now - offset;

    let location = SEED_LOCATIONS.choose(rng).copied().unwrap_or(SEED_LOCATIONS[0]);

    let risk_score = if risky {
        rng.gen_range(RISKY_SCORE_MIN..RISKY_SCORE_MAX)
    } else {
        rng.gen_range(0.0..NORMAL_SCORE_MAX)
    };

    SyntheticEvent {
        customer_id,
        vendor_id,
        amount: round_cents(amount),
        timestamp,
        location,
        risky,
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        reason: if risky { RISKY_REASON } else { NORMAL_REASON },
    }
}

/// Draw `count` independent events relative to `now`.
pub fn draw_batch<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: NaiveDateTime,
) -> Vec<SyntheticEvent> {
    (0..count).map(|_| draw_event(rng, now)).collect()
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
