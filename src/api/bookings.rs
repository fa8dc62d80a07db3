//! Booking API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    kurtaxe::KurtaxeBreakdown,
    models::booking::{Booking, BookingInput, BookingQuery, YearsResponse},
};

/// List years that have bookings
#[utoipa::path(
    get,
    path = "/years",
    tag = "bookings",
    responses(
        (status = 200, description = "Years, newest first", body = YearsResponse)
    )
)]
pub async fn list_years(State(state): State<crate::AppState>) -> AppResult<Json<YearsResponse>> {
    let years = state.services.bookings.list_years().await?;
    Ok(Json(YearsResponse { years }))
}

/// List bookings of a year
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(BookingQuery),
    responses(
        (status = 200, description = "Bookings ordered by check-in", body = Vec<Booking>),
        (status = 400, description = "Year missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let year = query
        .year
        .ok_or_else(|| AppError::BadRequest("year missing".to_string()))?;
    let bookings = state.services.bookings.list(year).await?;
    Ok(Json(bookings))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get_by_id(id).await?;
    Ok(Json(booking))
}

/// Create a booking
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = BookingInput,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid booking", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(data): Json<BookingInput>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(data).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Update a booking
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = BookingInput,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 400, description = "Invalid booking", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<BookingInput>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.update(id, data).await?;
    Ok(Json(booking))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Calculate the Kurtaxe for a stored booking.
///
/// The result is not saved; submit it as `kurtaxe_total` with a booking update.
#[utoipa::path(
    post,
    path = "/bookings/{id}/kurtaxe",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Kurtaxe breakdown", body = KurtaxeBreakdown),
        (status = 400, description = "Invalid stay or empty roster", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn calculate_booking_kurtaxe(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<KurtaxeBreakdown>> {
    let breakdown = state.services.kurtaxe.calculate_for_booking(id).await?;
    Ok(Json(breakdown))
}
