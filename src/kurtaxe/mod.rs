//! Tourist tax (Kurtaxe) computation
//!
//! This module contains the pure calculation engine: season classification,
//! age-bracket rate lookup and the per-night, per-guest accumulation over a stay.
//! Nothing in here touches the database; callers pass an owned snapshot of the
//! rate table.

pub mod calculator;
pub mod rates;
pub mod season;

pub use calculator::{calculate, MAX_GUESTS, Guest, KurtaxeBreakdown, KurtaxeError, SkipReason, SkippedGuest, Stay};
pub use rates::{resolve_rate, MAX_GUEST_AGE, validate_rate_table, RateRule, RateTableIssue};
pub use season::{is_high_season, Season};
