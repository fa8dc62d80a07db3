//! Kurtaxe rate table and calculation service

use crate::{
    config::KurtaxeSettings,
    error::AppResult,
    kurtaxe::{self, Guest, KurtaxeBreakdown, RateRule, Stay},
    models::booking::{check_roster, check_stay_length},
    models::kurtaxe_config::{
        CreateKurtaxeConfigEntry, KurtaxeConfigEntry, KurtaxeConfigList, UpdateKurtaxeConfigEntry,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct KurtaxeService {
    repository: Repository,
    settings: KurtaxeSettings,
}

impl KurtaxeService {
    pub fn new(repository: Repository, settings: KurtaxeSettings) -> Self {
        Self { repository, settings }
    }

    /// Rate table plus any issues detected in it
    pub async fn list_config(&self) -> AppResult<KurtaxeConfigList> {
        let config = self.repository.kurtaxe_config.list().await?;
        let rules: Vec<RateRule> = config.iter().map(RateRule::from).collect();
        let issues = kurtaxe::validate_rate_table(&rules);
        Ok(KurtaxeConfigList { config, issues })
    }

    pub async fn get_entry(&self, id: i32) -> AppResult<KurtaxeConfigEntry> {
        self.repository.kurtaxe_config.get_by_id(id).await
    }

    pub async fn create_entry(&self, data: &CreateKurtaxeConfigEntry) -> AppResult<KurtaxeConfigEntry> {
        data.check()?;
        let entry = self.repository.kurtaxe_config.create(data).await?;
        tracing::info!(id = entry.id, age_min = entry.age_min, age_max = entry.age_max, "Kurtaxe rate created");
        Ok(entry)
    }

    pub async fn update_entry(&self, id: i32, data: &UpdateKurtaxeConfigEntry) -> AppResult<KurtaxeConfigEntry> {
        let current = self.repository.kurtaxe_config.get_by_id(id).await?;
        data.check_against(&current)?;
        let entry = self.repository.kurtaxe_config.update(id, data).await?;
        tracing::info!(id = entry.id, "Kurtaxe rate updated");
        Ok(entry)
    }

    pub async fn delete_entry(&self, id: i32) -> AppResult<()> {
        self.repository.kurtaxe_config.delete(id).await?;
        tracing::info!(id, "Kurtaxe rate deleted");
        Ok(())
    }

    /// Load an owned copy of the rate table in lookup order.
    ///
    /// Each calculation works on its own snapshot, so rate edits made while it
    /// runs do not affect it.
    pub async fn rate_table(&self) -> AppResult<Vec<RateRule>> {
        let rules: Vec<RateRule> = self
            .repository
            .kurtaxe_config
            .list()
            .await?
            .iter()
            .map(RateRule::from)
            .collect();

        if self.settings.validate_rate_table {
            for issue in kurtaxe::validate_rate_table(&rules) {
                tracing::warn!("Kurtaxe rate table: {}", issue);
            }
        }

        Ok(rules)
    }

    /// Calculate the Kurtaxe for a stay and roster without storing anything.
    ///
    /// The roster and stay length are bounded by the same settings as a booking.
    pub async fn calculate(&self, stay: &Stay, guests: &[Guest]) -> AppResult<KurtaxeBreakdown> {
        check_roster(guests, &self.settings)?;
        check_stay_length(stay, &self.settings)?;
        let table = self.rate_table().await?;
        Ok(kurtaxe::calculate(stay, guests, &table)?)
    }

    /// Calculate the Kurtaxe for a stored booking. The booking is not modified.
    pub async fn calculate_for_booking(&self, booking_id: i32) -> AppResult<KurtaxeBreakdown> {
        let booking = self.repository.bookings.get_by_id(booking_id).await?;
        let breakdown = self.calculate(&booking.stay(), &booking.guests.0).await?;

        if breakdown.total != booking.kurtaxe_total {
            tracing::debug!(
                booking_id,
                stored = %booking.kurtaxe_total,
                calculated = %breakdown.total,
                "Stored Kurtaxe differs from calculation"
            );
        }

        Ok(breakdown)
    }
}
