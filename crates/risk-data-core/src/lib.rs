//! Core types and utilities for the risk data service.
//!
//! This crate provides the foundational types shared by the store and the HTTP API:
//!
//! - **Reference data**: `Customer`, `Vendor`, `VendorCategory` and the fixed seed universe
//! - **Risk**: `RiskLevel` and the score-to-level thresholds
//! - **Generation**: `SyntheticEvent` and the randomized risk heuristic
//! - **Read models**: `FeedEntry`, `RiskHistogram`
//!
//! # Risk Heuristic
//!
//! The risk score is a placeholder, not a model. 20% of synthetic events are
//! flagged risky; risky events get a tripled amount and a score drawn from
//! `[60, 100)`, all other events a score drawn from `[0, 30)`. The level
//! thresholds leave `MEDIUM` unreachable from the generator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod feed;
pub mod generator;
pub mod reference;
pub mod risk;

pub use error::CoreError;
pub use feed::{FeedEntry, RiskHistogram};
pub use generator::{
    draw_batch, draw_event, SyntheticEvent, NORMAL_REASON, RISKY_PROBABILITY, RISKY_REASON,
    TRANSACTION_STATUS,
};
pub use reference::{
    Customer, Vendor, VendorCategory, SEED_CUSTOMERS, SEED_LOCATIONS, SEED_VENDORS,
    UNKNOWN_LOCATION,
};
pub use risk::RiskLevel;
