//! Data models for the booking server

pub mod booking;
pub mod enums;
pub mod kurtaxe_config;

// Re-export commonly used types
pub use booking::{Booking, BookingInput, BookingQuery, BookingRecord, YearsResponse};
pub use enums::{BookingSource, BookingStatus, KurtaxeStatus, PaymentStatus};
pub use kurtaxe_config::{
    CreateKurtaxeConfigEntry, KurtaxeConfigEntry, KurtaxeConfigList, UpdateKurtaxeConfigEntry,
};
