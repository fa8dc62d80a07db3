//! Per-night, per-guest Kurtaxe accumulation over a stay

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::rates::{resolve_rate, RateRule, MAX_GUEST_AGE};
use super::season::Season;

/// Maximum number of guests on one booking. The calculator itself accepts any
/// roster size; booking save and the calculation endpoints enforce this cap.
pub const MAX_GUESTS: usize = 4;

/// Calculation failures. Both are correctable by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KurtaxeError {
    #[error("Check-in and check-out are required and check-out must be after check-in")]
    InvalidDateRange,

    #[error("At least one guest is required")]
    NoGuests,
}

/// A guest on the booking roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Guest {
    #[serde(default)]
    pub name: String,
    /// Age in years. `0` is a valid age; `null` means unknown and the guest is not charged.
    #[serde(default)]
    pub age: Option<i32>,
}

impl Guest {
    pub fn new(name: impl Into<String>, age: Option<i32>) -> Self {
        Self { name: name.into(), age }
    }

    /// Unknown ages pass; known ages must lie in `0..=MAX_GUEST_AGE`
    pub fn has_valid_age(&self) -> bool {
        self.age.map_or(true, |age| (0..=MAX_GUEST_AGE).contains(&age))
    }
}

/// Check-in/check-out interval. Nights are `check_in ..= check_out - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    /// Build a stay from possibly missing form values
    pub fn from_parts(
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> Result<Self, KurtaxeError> {
        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => Ok(Self::new(check_in, check_out)),
            _ => Err(KurtaxeError::InvalidDateRange),
        }
    }

    /// Signed number of nights; zero or negative for an empty or reversed range
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Dates of the charged nights, in order
    pub fn night_dates(&self) -> impl Iterator<Item = NaiveDate> {
        let nights = self.nights().max(0) as usize;
        self.check_in.iter_days().take(nights)
    }
}

/// Why a guest did not contribute to the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingAge,
    NoMatchingRate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SkippedGuest {
    /// Position in the roster
    pub index: usize,
    pub name: String,
    pub reason: SkipReason,
}

/// Result of a Kurtaxe calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct KurtaxeBreakdown {
    /// Total owed, rounded to cents
    #[schema(value_type = String, example = "10.50")]
    pub total: Decimal,
    pub nights: u32,
    pub high_season_nights: u32,
    pub low_season_nights: u32,
    /// Number of guests that were charged
    pub guests_charged: usize,
    /// Guests that contributed nothing
    pub skipped: Vec<SkippedGuest>,
}

impl std::fmt::Display for KurtaxeBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} EUR", self.total)?;
        match (self.high_season_nights, self.low_season_nights) {
            (high, 0) => write!(f, ", {} nights high season", high),
            (0, low) => write!(f, ", {} nights low season", low),
            (high, low) => write!(f, ", {}x high season + {}x low season", high, low),
        }
    }
}

/// Compute the Kurtaxe owed for a stay.
///
/// Every night from check-in up to (not including) check-out is classified by
/// season, then each guest with a known age is charged the matching bracket's
/// rate for that season. Guests without an age or without a matching bracket
/// are skipped and reported in [`KurtaxeBreakdown::skipped`].
pub fn calculate(
    stay: &Stay,
    guests: &[Guest],
    table: &[RateRule],
) -> Result<KurtaxeBreakdown, KurtaxeError> {
    let nights = stay.nights();
    if nights <= 0 {
        return Err(KurtaxeError::InvalidDateRange);
    }
    if guests.is_empty() {
        return Err(KurtaxeError::NoGuests);
    }

    // A guest's bracket does not depend on the night, resolve once up front.
    let mut skipped = Vec::new();
    let brackets: Vec<Option<&RateRule>> = guests
        .iter()
        .enumerate()
        .map(|(index, guest)| {
            let Some(age) = guest.age else {
                skipped.push(SkippedGuest { index, name: guest.name.clone(), reason: SkipReason::MissingAge });
                return None;
            };
            let rule = resolve_rate(age, table);
            if rule.is_none() {
                skipped.push(SkippedGuest { index, name: guest.name.clone(), reason: SkipReason::NoMatchingRate });
            }
            rule
        })
        .collect();

    let mut total = Decimal::ZERO;
    let mut high_season_nights = 0u32;
    let mut low_season_nights = 0u32;

    for date in stay.night_dates() {
        let season = Season::of(date);
        match season {
            Season::High => high_season_nights += 1,
            Season::Low => low_season_nights += 1,
        }
        for rule in brackets.iter().flatten() {
            total += rule.rate_for(season);
        }
    }

    let breakdown = KurtaxeBreakdown {
        total: total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        nights: high_season_nights + low_season_nights,
        high_season_nights,
        low_season_nights,
        guests_charged: brackets.iter().flatten().count(),
        skipped,
    };

    tracing::debug!(
        check_in = %stay.check_in,
        check_out = %stay.check_out,
        guests = guests.len(),
        "Kurtaxe calculated: {}",
        breakdown
    );

    Ok(breakdown)
}
