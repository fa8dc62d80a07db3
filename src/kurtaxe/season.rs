//! High/low season classification
//!
//! High season runs from March 15 through October 31. The cutover dates are
//! fixed policy and not configurable.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Billing season of a single night
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    High,
    Low,
}

impl Season {
    /// Classify a calendar date
    pub fn of(date: NaiveDate) -> Self {
        if is_high_season(date) {
            Season::High
        } else {
            Season::Low
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::High => write!(f, "high"),
            Season::Low => write!(f, "low"),
        }
    }
}

/// Returns true if the night starting on `date` is billed at the high season rate
pub fn is_high_season(date: NaiveDate) -> bool {
    match date.month() {
        4..=10 => true,
        3 => date.day() >= 15,
        _ => false,
    }
}
