//! Bookings repository

use sqlx::{types::Json, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingRecord},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Years with at least one booking, newest first
    pub async fn list_years(&self) -> AppResult<Vec<i32>> {
        let years = sqlx::query_scalar::<_, i32>("SELECT DISTINCT year FROM bookings ORDER BY year DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(years)
    }

    /// Bookings of one year ordered by check-in
    pub async fn list_by_year(&self, year: i32) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE year = $1 ORDER BY check_in ASC, id ASC",
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Insert a new booking
    pub async fn create(&self, data: &BookingRecord) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                year, status, source, check_in, check_out, booked_at,
                persons, guest_name, guests,
                price_total, paid_status, cleaning_fee, cleaning_paid,
                kurtaxe_total, kurtaxe_status, kurtaxe_paid, kurkarte_included,
                laundry_booked, laundry_included, laundry_paid, laundry_fee,
                notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
            RETURNING *
            "#,
        )
        .bind(data.year)
        .bind(data.status)
        .bind(data.source)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(&data.booked_at)
        .bind(data.persons)
        .bind(&data.guest_name)
        .bind(Json(&data.guests))
        .bind(data.price_total)
        .bind(data.paid_status)
        .bind(data.cleaning_fee)
        .bind(data.cleaning_paid)
        .bind(data.kurtaxe_total)
        .bind(data.kurtaxe_status)
        .bind(data.kurtaxe_paid)
        .bind(data.kurkarte_included)
        .bind(data.laundry_booked)
        .bind(data.laundry_included)
        .bind(data.laundry_paid)
        .bind(data.laundry_fee)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Replace all editable fields of a booking. `created_at` is kept.
    pub async fn update(&self, id: i32, data: &BookingRecord) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                year = $1, status = $2, source = $3,
                check_in = $4, check_out = $5, booked_at = $6,
                persons = $7, guest_name = $8, guests = $9,
                price_total = $10, paid_status = $11,
                cleaning_fee = $12, cleaning_paid = $13,
                kurtaxe_total = $14, kurtaxe_status = $15, kurtaxe_paid = $16, kurkarte_included = $17,
                laundry_booked = $18, laundry_included = $19, laundry_paid = $20, laundry_fee = $21,
                notes = $22,
                updated_at = NOW()
            WHERE id = $23
            RETURNING *
            "#,
        )
        .bind(data.year)
        .bind(data.status)
        .bind(data.source)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(&data.booked_at)
        .bind(data.persons)
        .bind(&data.guest_name)
        .bind(Json(&data.guests))
        .bind(data.price_total)
        .bind(data.paid_status)
        .bind(data.cleaning_fee)
        .bind(data.cleaning_paid)
        .bind(data.kurtaxe_total)
        .bind(data.kurtaxe_status)
        .bind(data.kurtaxe_paid)
        .bind(data.kurkarte_included)
        .bind(data.laundry_booked)
        .bind(data.laundry_included)
        .bind(data.laundry_paid)
        .bind(data.laundry_fee)
        .bind(&data.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Delete a booking
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        Ok(())
    }
}
