//! Kurtaxe rate table model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    kurtaxe::{RateRule, RateTableIssue},
};

/// One age bracket of the rate table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct KurtaxeConfigEntry {
    pub id: i32,
    /// Lowest age covered (inclusive)
    pub age_min: i32,
    /// Highest age covered (inclusive)
    pub age_max: i32,
    #[schema(value_type = String, example = "3.50")]
    pub rate_high_season: Decimal,
    #[schema(value_type = String, example = "2.00")]
    pub rate_low_season: Decimal,
    pub description: String,
    /// Position in the table; lookups take the first matching bracket
    pub sort: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&KurtaxeConfigEntry> for RateRule {
    fn from(entry: &KurtaxeConfigEntry) -> Self {
        RateRule {
            age_min: entry.age_min,
            age_max: entry.age_max,
            rate_high_season: entry.rate_high_season,
            rate_low_season: entry.rate_low_season,
            description: entry.description.clone(),
        }
    }
}

/// Create rate entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateKurtaxeConfigEntry {
    #[validate(range(min = 0, max = 999, message = "age_min must be between 0 and 999"))]
    pub age_min: i32,
    #[validate(range(min = 0, max = 999, message = "age_max must be between 0 and 999"))]
    pub age_max: i32,
    #[schema(value_type = String)]
    pub rate_high_season: Decimal,
    #[schema(value_type = String)]
    pub rate_low_season: Decimal,
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
    pub sort: Option<i32>,
}

/// Update rate entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateKurtaxeConfigEntry {
    #[validate(range(min = 0, max = 999, message = "age_min must be between 0 and 999"))]
    pub age_min: Option<i32>,
    #[validate(range(min = 0, max = 999, message = "age_max must be between 0 and 999"))]
    pub age_max: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub rate_high_season: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub rate_low_season: Option<Decimal>,
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
    pub sort: Option<i32>,
}

fn check_bracket(age_min: i32, age_max: i32, high: Decimal, low: Decimal) -> AppResult<()> {
    if age_min > age_max {
        return Err(AppError::Validation(format!(
            "age_min ({}) must not be greater than age_max ({})",
            age_min, age_max
        )));
    }
    for (value, field) in [(high, "rate_high_season"), (low, "rate_low_season")] {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AppError::Validation(format!("{} must not be negative", field)));
        }
    }
    Ok(())
}

impl CreateKurtaxeConfigEntry {
    /// Field validation plus bracket consistency
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        check_bracket(self.age_min, self.age_max, self.rate_high_season, self.rate_low_season)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default().trim()
    }
}

impl UpdateKurtaxeConfigEntry {
    /// Validate the update as applied on top of the stored entry
    pub fn check_against(&self, current: &KurtaxeConfigEntry) -> AppResult<()> {
        self.validate()?;
        check_bracket(
            self.age_min.unwrap_or(current.age_min),
            self.age_max.unwrap_or(current.age_max),
            self.rate_high_season.unwrap_or(current.rate_high_season),
            self.rate_low_season.unwrap_or(current.rate_low_season),
        )
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim)
    }
}

/// Rate table with any well-formedness issues found in it
#[derive(Debug, Serialize, ToSchema)]
pub struct KurtaxeConfigList {
    pub config: Vec<KurtaxeConfigEntry>,
    pub issues: Vec<RateTableIssue>,
}
