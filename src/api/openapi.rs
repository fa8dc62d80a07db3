//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, health, kurtaxe, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kurtaxe Booking API",
        version = "0.3.0",
        description = "Holiday rental bookings with tourist tax (Kurtaxe) calculation",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Bookings
        bookings::list_years,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        bookings::calculate_booking_kurtaxe,
        // Kurtaxe
        kurtaxe::list_config,
        kurtaxe::get_config_entry,
        kurtaxe::create_config_entry,
        kurtaxe::update_config_entry,
        kurtaxe::delete_config_entry,
        kurtaxe::calculate,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingInput,
            crate::models::booking::BookingQuery,
            crate::models::booking::YearsResponse,
            crate::models::enums::BookingStatus,
            crate::models::enums::BookingSource,
            crate::models::enums::PaymentStatus,
            crate::models::enums::KurtaxeStatus,
            // Kurtaxe
            crate::models::kurtaxe_config::KurtaxeConfigEntry,
            crate::models::kurtaxe_config::CreateKurtaxeConfigEntry,
            crate::models::kurtaxe_config::UpdateKurtaxeConfigEntry,
            crate::models::kurtaxe_config::KurtaxeConfigList,
            crate::kurtaxe::Guest,
            crate::kurtaxe::Stay,
            crate::kurtaxe::RateRule,
            crate::kurtaxe::RateTableIssue,
            crate::kurtaxe::KurtaxeBreakdown,
            crate::kurtaxe::SkippedGuest,
            crate::kurtaxe::SkipReason,
            crate::kurtaxe::Season,
            kurtaxe::CalculateKurtaxeRequest,
            // Stats
            crate::services::stats::YearStats,
            stats::StatsQuery,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "bookings", description = "Booking management"),
        (name = "kurtaxe", description = "Kurtaxe rate table and calculation"),
        (name = "stats", description = "Revenue statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
