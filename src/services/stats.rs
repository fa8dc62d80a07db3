//! Yearly revenue statistics

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::booking::Booking, repository::Repository};

/// Revenue and open amounts for one year
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct YearStats {
    pub year: i32,
    /// Number of bookings
    pub bookings: usize,
    /// Sum of booked nights
    pub nights: i64,
    /// Sum of rental prices
    #[schema(value_type = String)]
    pub total_revenue: Decimal,
    /// Kurtaxe not yet paid
    #[schema(value_type = String)]
    pub open_kurtaxe: Decimal,
    /// Cleaning fees not yet paid
    #[schema(value_type = String)]
    pub open_cleaning: Decimal,
    /// Booked laundry not yet paid
    #[schema(value_type = String)]
    pub open_laundry: Decimal,
    /// Kurtaxe + cleaning + booked laundry
    #[schema(value_type = String)]
    pub total_costs: Decimal,
    /// Revenue minus costs
    #[schema(value_type = String)]
    pub net_revenue: Decimal,
}

impl YearStats {
    pub fn from_bookings(year: i32, bookings: &[Booking]) -> Self {
        let mut stats = YearStats {
            year,
            bookings: bookings.len(),
            nights: 0,
            total_revenue: Decimal::ZERO,
            open_kurtaxe: Decimal::ZERO,
            open_cleaning: Decimal::ZERO,
            open_laundry: Decimal::ZERO,
            total_costs: Decimal::ZERO,
            net_revenue: Decimal::ZERO,
        };

        for b in bookings {
            stats.nights += b.stay().nights().max(0);
            stats.total_revenue += b.price_total;

            if !b.kurtaxe_paid {
                stats.open_kurtaxe += b.kurtaxe_total;
            }
            if !b.cleaning_paid {
                stats.open_cleaning += b.cleaning_fee;
            }
            if b.laundry_booked && !b.laundry_paid {
                stats.open_laundry += b.laundry_fee;
            }

            stats.total_costs += b.kurtaxe_total + b.cleaning_fee;
            if b.laundry_booked {
                stats.total_costs += b.laundry_fee;
            }
        }

        stats.net_revenue = stats.total_revenue - stats.total_costs;
        stats
    }
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn year_stats(&self, year: i32) -> AppResult<YearStats> {
        let bookings = self.repository.bookings.list_by_year(year).await?;
        Ok(YearStats::from_bookings(year, &bookings))
    }
}
