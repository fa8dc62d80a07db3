//! Kurtaxe booking server
//!
//! A REST JSON API for tracking holiday rental bookings, their fees and
//! payment state, and for calculating the per-night tourist tax (Kurtaxe)
//! owed for each stay.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod kurtaxe;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
