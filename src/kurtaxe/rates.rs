//! Age-bracket rate rules and lookup

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::season::Season;

/// Highest guest age the roster editor accepts; coverage checks stop here
pub const MAX_GUEST_AGE: i32 = 120;

/// A single age bracket with its per-night rates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RateRule {
    /// Lowest age covered (inclusive)
    pub age_min: i32,
    /// Highest age covered (inclusive)
    pub age_max: i32,
    /// Per-night rate from March 15 to October 31
    #[schema(value_type = String, example = "3.50")]
    pub rate_high_season: Decimal,
    /// Per-night rate for the rest of the year
    #[schema(value_type = String, example = "2.00")]
    pub rate_low_season: Decimal,
    pub description: String,
}

impl RateRule {
    pub fn covers(&self, age: i32) -> bool {
        self.age_min <= age && age <= self.age_max
    }

    /// Rate charged for one night in the given season
    pub fn rate_for(&self, season: Season) -> Decimal {
        match season {
            Season::High => self.rate_high_season,
            Season::Low => self.rate_low_season,
        }
    }
}

/// Find the rule applying to `age`.
///
/// The first rule in table order wins when brackets overlap. `None` means the
/// guest is not charged.
pub fn resolve_rate(age: i32, table: &[RateRule]) -> Option<&RateRule> {
    table.iter().find(|rule| rule.covers(age))
}

/// A well-formedness problem in a rate table.
///
/// These never change how lookups behave; they are reported so an
/// administrator can fix the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateTableIssue {
    /// `age_min` is greater than `age_max`, the rule never matches
    InvertedRange { index: usize, age_min: i32, age_max: i32 },
    /// Two rules share at least one age; the earlier one shadows the later
    Overlap { first: usize, second: usize, age_min: i32, age_max: i32 },
    /// A rate is below zero
    NegativeRate { index: usize },
    /// No rule covers these ages, guests in this range are not charged
    Gap { age_min: i32, age_max: i32 },
}

impl std::fmt::Display for RateTableIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateTableIssue::InvertedRange { index, age_min, age_max } => {
                write!(f, "rule #{} has inverted age range {}-{}", index, age_min, age_max)
            }
            RateTableIssue::Overlap { first, second, age_min, age_max } => write!(
                f,
                "rules #{} and #{} overlap on ages {}-{} (rule #{} wins)",
                first, second, age_min, age_max, first
            ),
            RateTableIssue::NegativeRate { index } => {
                write!(f, "rule #{} has a negative rate", index)
            }
            RateTableIssue::Gap { age_min, age_max } => {
                write!(f, "no rule covers ages {}-{}", age_min, age_max)
            }
        }
    }
}

/// Check a rate table for inverted ranges, overlaps, negative rates and
/// coverage gaps within `0..=MAX_GUEST_AGE`.
pub fn validate_rate_table(table: &[RateRule]) -> Vec<RateTableIssue> {
    let mut issues = Vec::new();

    for (index, rule) in table.iter().enumerate() {
        if rule.age_min > rule.age_max {
            issues.push(RateTableIssue::InvertedRange {
                index,
                age_min: rule.age_min,
                age_max: rule.age_max,
            });
        }
        if rule.rate_high_season.is_sign_negative() || rule.rate_low_season.is_sign_negative() {
            issues.push(RateTableIssue::NegativeRate { index });
        }
    }

    for (first, a) in table.iter().enumerate() {
        for (second, b) in table.iter().enumerate().skip(first + 1) {
            let lo = a.age_min.max(b.age_min);
            let hi = a.age_max.min(b.age_max);
            if lo <= hi {
                issues.push(RateTableIssue::Overlap { first, second, age_min: lo, age_max: hi });
            }
        }
    }

    let mut gap_start: Option<i32> = None;
    for age in 0..=MAX_GUEST_AGE {
        let covered = resolve_rate(age, table).is_some();
        match (covered, gap_start) {
            (false, None) => gap_start = Some(age),
            (true, Some(start)) => {
                issues.push(RateTableIssue::Gap { age_min: start, age_max: age - 1 });
                gap_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = gap_start {
        issues.push(RateTableIssue::Gap { age_min: start, age_max: MAX_GUEST_AGE });
    }

    issues
}
