//! API handlers for the booking server REST endpoints

pub mod bookings;
pub mod health;
pub mod kurtaxe;
pub mod openapi;
pub mod stats;
