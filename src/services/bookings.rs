//! Booking management service

use crate::{
    config::KurtaxeSettings,
    error::AppResult,
    models::booking::{Booking, BookingInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    settings: KurtaxeSettings,
}

impl BookingsService {
    pub fn new(repository: Repository, settings: KurtaxeSettings) -> Self {
        Self { repository, settings }
    }

    pub async fn list_years(&self) -> AppResult<Vec<i32>> {
        self.repository.bookings.list_years().await
    }

    pub async fn list(&self, year: i32) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list_by_year(year).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// Create a booking. The Kurtaxe total is stored as submitted.
    pub async fn create(&self, data: BookingInput) -> AppResult<Booking> {
        let record = data.into_record(&self.settings)?;
        let booking = self.repository.bookings.create(&record).await?;
        tracing::info!(id = booking.id, year = booking.year, "Booking created");
        Ok(booking)
    }

    /// Replace a booking's fields, keeping its creation date
    pub async fn update(&self, id: i32, data: BookingInput) -> AppResult<Booking> {
        let record = data.into_record(&self.settings)?;
        let booking = self.repository.bookings.update(id, &record).await?;
        tracing::info!(id, "Booking updated");
        Ok(booking)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.bookings.delete(id).await?;
        tracing::info!(id, "Booking deleted");
        Ok(())
    }
}
