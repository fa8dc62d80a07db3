//! Statistics endpoints

use axum::{extract::Query, extract::State, Json};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, services::stats::YearStats};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct StatsQuery {
    /// Year to aggregate, defaults to the current year
    pub year: Option<i32>,
}

/// Revenue statistics for a year
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Year statistics", body = YearStats)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<YearStats>> {
    let year = query.year.unwrap_or_else(|| Utc::now().year());
    let stats = state.services.stats.year_stats(year).await?;
    Ok(Json(stats))
}
