//! Business logic services

pub mod bookings;
pub mod kurtaxe;
pub mod stats;

use crate::{config::KurtaxeSettings, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub bookings: bookings::BookingsService,
    pub kurtaxe: kurtaxe::KurtaxeService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, settings: KurtaxeSettings) -> Self {
        Self {
            bookings: bookings::BookingsService::new(repository.clone(), settings.clone()),
            kurtaxe: kurtaxe::KurtaxeService::new(repository.clone(), settings),
            stats: stats::StatsService::new(repository.clone()),
            repository,
        }
    }
}
