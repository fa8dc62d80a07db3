//! Booking model and related types

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{BookingSource, BookingStatus, KurtaxeStatus, PaymentStatus};
use crate::{
    config::KurtaxeSettings,
    error::{AppError, AppResult},
    kurtaxe::{Guest, KurtaxeError, Stay, MAX_GUEST_AGE},
};

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    /// Accounting year the booking is listed under
    pub year: i32,
    pub status: BookingStatus,
    pub source: BookingSource,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Free-form booking date as entered by the operator
    pub booked_at: Option<String>,
    pub persons: i32,
    /// Name of the main guest
    pub guest_name: String,
    /// Guest roster used for the Kurtaxe
    #[schema(value_type = Vec<Guest>)]
    pub guests: Json<Vec<Guest>>,
    #[schema(value_type = String)]
    pub price_total: Decimal,
    pub paid_status: PaymentStatus,
    #[schema(value_type = String)]
    pub cleaning_fee: Decimal,
    pub cleaning_paid: bool,
    /// Kurtaxe total as last saved by the operator
    #[schema(value_type = String)]
    pub kurtaxe_total: Decimal,
    pub kurtaxe_status: KurtaxeStatus,
    pub kurtaxe_paid: bool,
    /// Whether the guest card (Kurkarte) is included in the price
    pub kurkarte_included: bool,
    pub laundry_booked: bool,
    pub laundry_included: bool,
    pub laundry_paid: bool,
    #[schema(value_type = String)]
    pub laundry_fee: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn stay(&self) -> Stay {
        Stay::new(self.check_in, self.check_out)
    }
}

/// Create or update booking request.
///
/// Updates replace the whole record, so both operations share this shape.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BookingInput {
    /// Defaults to the check-in year
    #[validate(range(min = 2000, max = 2100, message = "Year must be between 2000 and 2100"))]
    pub year: Option<i32>,
    pub status: Option<BookingStatus>,
    pub source: Option<BookingSource>,
    /// Check-in date (YYYY-MM-DD)
    pub check_in: Option<String>,
    /// Check-out date (YYYY-MM-DD)
    pub check_out: Option<String>,
    #[validate(length(max = 40, message = "booked_at must be at most 40 characters"))]
    pub booked_at: Option<String>,
    pub persons: Option<i32>,
    #[validate(length(max = 200, message = "Guest name must be at most 200 characters"))]
    pub guest_name: Option<String>,
    pub guests: Option<Vec<Guest>>,
    #[schema(value_type = Option<String>)]
    pub price_total: Option<Decimal>,
    pub paid_status: Option<PaymentStatus>,
    #[schema(value_type = Option<String>)]
    pub cleaning_fee: Option<Decimal>,
    pub cleaning_paid: Option<bool>,
    #[schema(value_type = Option<String>)]
    pub kurtaxe_total: Option<Decimal>,
    pub kurtaxe_status: Option<KurtaxeStatus>,
    pub kurtaxe_paid: Option<bool>,
    pub kurkarte_included: Option<bool>,
    pub laundry_booked: Option<bool>,
    pub laundry_included: Option<bool>,
    pub laundry_paid: Option<bool>,
    #[schema(value_type = Option<String>)]
    pub laundry_fee: Option<Decimal>,
    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Fully resolved booking values ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub year: i32,
    pub status: BookingStatus,
    pub source: BookingSource,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub booked_at: Option<String>,
    pub persons: i32,
    pub guest_name: String,
    pub guests: Vec<Guest>,
    pub price_total: Decimal,
    pub paid_status: PaymentStatus,
    pub cleaning_fee: Decimal,
    pub cleaning_paid: bool,
    pub kurtaxe_total: Decimal,
    pub kurtaxe_status: KurtaxeStatus,
    pub kurtaxe_paid: bool,
    pub kurkarte_included: bool,
    pub laundry_booked: bool,
    pub laundry_included: bool,
    pub laundry_paid: bool,
    pub laundry_fee: Decimal,
    pub notes: String,
}

fn parse_date(value: Option<&str>, field: &str) -> AppResult<NaiveDate> {
    value
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .ok_or_else(|| AppError::Validation(format!("{} is missing or not a YYYY-MM-DD date", field)))
}

fn non_negative(value: Option<Decimal>, default: Decimal, field: &str) -> AppResult<Decimal> {
    let value = value.unwrap_or(default);
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::Validation(format!("{} must not be negative", field)));
    }
    Ok(value)
}

/// Enforce the roster cap and guest age bounds
pub fn check_roster(guests: &[Guest], settings: &KurtaxeSettings) -> AppResult<()> {
    if guests.len() > settings.max_guests {
        return Err(AppError::TooManyGuests(format!(
            "A booking can have at most {} guests",
            settings.max_guests
        )));
    }
    if let Some(guest) = guests.iter().find(|g| !g.has_valid_age()) {
        return Err(AppError::Validation(format!(
            "Guest age must be between 0 and {} (got {:?} for '{}')",
            MAX_GUEST_AGE, guest.age, guest.name
        )));
    }
    Ok(())
}

/// Reject stays longer than the configured maximum
pub fn check_stay_length(stay: &Stay, settings: &KurtaxeSettings) -> AppResult<()> {
    if stay.nights() > settings.max_nights {
        return Err(AppError::Validation(format!(
            "A stay can be at most {} nights",
            settings.max_nights
        )));
    }
    Ok(())
}

impl BookingInput {
    /// Validate the request and fill in defaults
    pub fn into_record(self, settings: &KurtaxeSettings) -> AppResult<BookingRecord> {
        self.validate()?;

        let check_in = parse_date(self.check_in.as_deref(), "check_in")?;
        let check_out = parse_date(self.check_out.as_deref(), "check_out")?;
        let stay = Stay::new(check_in, check_out);
        if stay.nights() <= 0 {
            return Err(KurtaxeError::InvalidDateRange.into());
        }
        check_stay_length(&stay, settings)?;

        let year = self.year.unwrap_or_else(|| check_in.year());
        if !(2000..=2100).contains(&year) {
            return Err(AppError::Validation("Year must be between 2000 and 2100".to_string()));
        }

        let guests = self.guests.unwrap_or_default();
        check_roster(&guests, settings)?;

        let persons = self.persons.unwrap_or(1).max(1);
        let laundry_booked = self.laundry_booked.unwrap_or(false);
        let laundry_default = if laundry_booked {
            settings.laundry_fee_per_person * Decimal::from(persons)
        } else {
            Decimal::ZERO
        };

        Ok(BookingRecord {
            year,
            status: self.status.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            check_in,
            check_out,
            booked_at: self.booked_at.filter(|s| !s.trim().is_empty()),
            persons,
            guest_name: self.guest_name.unwrap_or_default().trim().to_string(),
            guests,
            price_total: non_negative(self.price_total, Decimal::ZERO, "price_total")?,
            paid_status: self.paid_status.unwrap_or_default(),
            cleaning_fee: non_negative(self.cleaning_fee, settings.default_cleaning_fee, "cleaning_fee")?,
            cleaning_paid: self.cleaning_paid.unwrap_or(false),
            kurtaxe_total: non_negative(self.kurtaxe_total, Decimal::ZERO, "kurtaxe_total")?,
            kurtaxe_status: self.kurtaxe_status.unwrap_or_default(),
            kurtaxe_paid: self.kurtaxe_paid.unwrap_or(false),
            kurkarte_included: self.kurkarte_included.unwrap_or(false),
            laundry_booked,
            laundry_included: self.laundry_included.unwrap_or(false),
            laundry_paid: self.laundry_paid.unwrap_or(false),
            laundry_fee: non_negative(self.laundry_fee, laundry_default, "laundry_fee")?,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

/// Query parameters for listing bookings
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookingQuery {
    /// Accounting year
    pub year: Option<i32>,
}

/// Years that have at least one booking
#[derive(Debug, Serialize, ToSchema)]
pub struct YearsResponse {
    pub years: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BookingInput {
        BookingInput {
            check_in: Some("2026-08-01".to_string()),
            check_out: Some("2026-08-04".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let record = input().into_record(&KurtaxeSettings::default()).unwrap();
        assert_eq!(record.year, 2026);
        assert_eq!(record.persons, 1);
        assert_eq!(record.status, BookingStatus::Inquiry);
        assert_eq!(record.source, BookingSource::Airbnb);
        assert_eq!(record.paid_status, PaymentStatus::Unpaid);
        assert_eq!(record.kurtaxe_status, KurtaxeStatus::Open);
        assert_eq!(record.cleaning_fee, Decimal::new(100, 0));
        assert_eq!(record.laundry_fee, Decimal::ZERO);
        assert!(record.guests.is_empty());
    }

    #[test]
    fn test_missing_dates_rejected() {
        let mut data = input();
        data.check_out = None;
        assert!(matches!(
            data.into_record(&KurtaxeSettings::default()),
            Err(AppError::Validation(_))
        ));

        let mut data = input();
        data.check_in = Some("01.08.2026".to_string());
        assert!(matches!(
            data.into_record(&KurtaxeSettings::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_check_out_must_follow_check_in() {
        let mut data = input();
        data.check_out = Some("2026-08-01".to_string());
        assert!(matches!(
            data.into_record(&KurtaxeSettings::default()),
            Err(AppError::Kurtaxe(KurtaxeError::InvalidDateRange))
        ));

        let mut data = input();
        data.check_out = Some("2026-07-30".to_string());
        assert!(matches!(
            data.into_record(&KurtaxeSettings::default()),
            Err(AppError::Kurtaxe(KurtaxeError::InvalidDateRange))
        ));
    }

    #[test]
    fn test_stay_length_capped() {
        let settings = KurtaxeSettings {
            max_nights: 3,
            ..KurtaxeSettings::default()
        };
        assert!(input().into_record(&settings).is_ok());

        let mut data = input();
        data.check_out = Some("2026-08-05".to_string());
        assert!(matches!(data.into_record(&settings), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_year_out_of_range() {
        let mut data = input();
        data.year = Some(1999);
        assert!(data.into_record(&KurtaxeSettings::default()).is_err());
    }

    #[test]
    fn test_persons_clamped() {
        let mut data = input();
        data.persons = Some(0);
        assert_eq!(data.into_record(&KurtaxeSettings::default()).unwrap().persons, 1);
    }

    #[test]
    fn test_laundry_fee_defaults_per_person() {
        let mut data = input();
        data.persons = Some(3);
        data.laundry_booked = Some(true);
        let record = data.into_record(&KurtaxeSettings::default()).unwrap();
        assert_eq!(record.laundry_fee, Decimal::new(45, 0));

        let mut data = input();
        data.laundry_booked = Some(true);
        data.laundry_fee = Some(Decimal::new(2000, 2));
        let record = data.into_record(&KurtaxeSettings::default()).unwrap();
        assert_eq!(record.laundry_fee, Decimal::new(20, 0));
    }

    #[test]
    fn test_roster_cap() {
        let mut data = input();
        data.guests = Some(vec![Guest::new("Guest", Some(30)); 5]);
        assert!(matches!(
            data.into_record(&KurtaxeSettings::default()),
            Err(AppError::TooManyGuests(_))
        ));

        let mut data = input();
        data.guests = Some(vec![Guest::new("Guest", Some(30)); 4]);
        assert_eq!(data.into_record(&KurtaxeSettings::default()).unwrap().guests.len(), 4);
    }

    #[test]
    fn test_guest_age_bounds() {
        let mut data = input();
        data.guests = Some(vec![Guest::new("Guest", Some(-1))]);
        assert!(data.into_record(&KurtaxeSettings::default()).is_err());

        let mut data = input();
        data.guests = Some(vec![Guest::new("Baby", Some(0)), Guest::new("Unknown", None)]);
        assert!(data.into_record(&KurtaxeSettings::default()).is_ok());
    }

    #[test]
    fn test_calculation_bounds() {
        let settings = KurtaxeSettings::default();
        let adult = Guest::new("Adult", Some(30));

        assert!(check_roster(&vec![adult.clone(); 4], &settings).is_ok());
        assert!(matches!(
            check_roster(&vec![adult; 200], &settings),
            Err(AppError::TooManyGuests(_))
        ));
        assert!(matches!(
            check_roster(&[Guest::new("Minus", Some(-5))], &settings),
            Err(AppError::Validation(_))
        ));

        let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let long = Stay::new(date("0001-01-01"), date("9999-12-31"));
        assert!(matches!(check_stay_length(&long, &settings), Err(AppError::Validation(_))));
        let year = Stay::new(date("2026-01-01"), date("2027-01-01"));
        assert!(check_stay_length(&year, &settings).is_ok());
        // Reversed ranges are left to the calculator
        let reversed = Stay::new(date("2026-08-04"), date("2026-08-01"));
        assert!(check_stay_length(&reversed, &settings).is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut data = input();
        data.price_total = Some(Decimal::new(-1, 0));
        assert!(data.into_record(&KurtaxeSettings::default()).is_err());
    }

    #[test]
    fn test_notes_length_validated() {
        let mut data = input();
        data.notes = Some("x".repeat(5001));
        assert!(data.into_record(&KurtaxeSettings::default()).is_err());
    }
}
