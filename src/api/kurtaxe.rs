//! Kurtaxe rate table and calculation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    kurtaxe::{Guest, KurtaxeBreakdown, KurtaxeError, Stay},
    models::kurtaxe_config::{
        CreateKurtaxeConfigEntry, KurtaxeConfigEntry, KurtaxeConfigList, UpdateKurtaxeConfigEntry,
    },
};

/// Kurtaxe calculation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculateKurtaxeRequest {
    /// Check-in date (YYYY-MM-DD)
    pub check_in: Option<String>,
    /// Check-out date (YYYY-MM-DD), not charged
    pub check_out: Option<String>,
    #[serde(default)]
    pub guests: Vec<Guest>,
}

impl CalculateKurtaxeRequest {
    /// Missing or unparseable dates count as an invalid range
    pub fn stay(&self) -> Result<Stay, KurtaxeError> {
        let parse = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        };
        Stay::from_parts(parse(&self.check_in), parse(&self.check_out))
    }
}

/// Get the rate table
#[utoipa::path(
    get,
    path = "/kurtaxe-config",
    tag = "kurtaxe",
    responses(
        (status = 200, description = "Rate table in lookup order", body = KurtaxeConfigList)
    )
)]
pub async fn list_config(State(state): State<crate::AppState>) -> AppResult<Json<KurtaxeConfigList>> {
    let list = state.services.kurtaxe.list_config().await?;
    Ok(Json(list))
}

/// Get a rate entry
#[utoipa::path(
    get,
    path = "/kurtaxe-config/{id}",
    tag = "kurtaxe",
    params(("id" = i32, Path, description = "Rate entry ID")),
    responses(
        (status = 200, description = "Rate entry", body = KurtaxeConfigEntry),
        (status = 404, description = "Rate entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_config_entry(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<KurtaxeConfigEntry>> {
    let entry = state.services.kurtaxe.get_entry(id).await?;
    Ok(Json(entry))
}

/// Create a rate entry
#[utoipa::path(
    post,
    path = "/kurtaxe-config",
    tag = "kurtaxe",
    request_body = CreateKurtaxeConfigEntry,
    responses(
        (status = 201, description = "Rate entry created", body = KurtaxeConfigEntry),
        (status = 400, description = "Invalid rate entry", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_config_entry(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateKurtaxeConfigEntry>,
) -> AppResult<(StatusCode, Json<KurtaxeConfigEntry>)> {
    let entry = state.services.kurtaxe.create_entry(&data).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a rate entry
#[utoipa::path(
    put,
    path = "/kurtaxe-config/{id}",
    tag = "kurtaxe",
    params(("id" = i32, Path, description = "Rate entry ID")),
    request_body = UpdateKurtaxeConfigEntry,
    responses(
        (status = 200, description = "Rate entry updated", body = KurtaxeConfigEntry),
        (status = 404, description = "Rate entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_config_entry(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateKurtaxeConfigEntry>,
) -> AppResult<Json<KurtaxeConfigEntry>> {
    let entry = state.services.kurtaxe.update_entry(id, &data).await?;
    Ok(Json(entry))
}

/// Delete a rate entry
#[utoipa::path(
    delete,
    path = "/kurtaxe-config/{id}",
    tag = "kurtaxe",
    params(("id" = i32, Path, description = "Rate entry ID")),
    responses(
        (status = 204, description = "Rate entry deleted"),
        (status = 404, description = "Rate entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_config_entry(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.kurtaxe.delete_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Calculate the Kurtaxe for a stay and guest roster.
///
/// Nothing is stored.
#[utoipa::path(
    post,
    path = "/kurtaxe/calculate",
    tag = "kurtaxe",
    request_body = CalculateKurtaxeRequest,
    responses(
        (status = 200, description = "Kurtaxe breakdown", body = KurtaxeBreakdown),
        (status = 400, description = "InvalidDateRange, NoGuests, TooManyGuests or BadValue", body = crate::error::ErrorResponse)
    )
)]
pub async fn calculate(
    State(state): State<crate::AppState>,
    Json(request): Json<CalculateKurtaxeRequest>,
) -> AppResult<Json<KurtaxeBreakdown>> {
    let stay = request.stay()?;
    let breakdown = state.services.kurtaxe.calculate(&stay, &request.guests).await?;
    Ok(Json(breakdown))
}
