//! Domain service - business logic orchestration

use super::repository::OtpSettingsStore;
use super::seeding::SeedingPolicy;
use super::validation::validate_updates;
use crate::contract::{OtpSetting, OtpSettingUpdate, OtpSettingsError, UpdateStrategy};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for OTP settings
pub struct Service {
    store: Arc<dyn OtpSettingsStore>,
    seeding: SeedingPolicy,
}

impl Service {
    /// Create a new service instance
    pub fn new(store: Arc<dyn OtpSettingsStore>, seeding: SeedingPolicy) -> Self {
        Self { store, seeding }
    }

    // ===== Read Operations =====

    /// Current settings, seeding the default actions into an empty store
    pub async fn get_settings(&self) -> Result<Vec<OtpSetting>, OtpSettingsError> {
        self.seeding
            .ensure_seeded(self.store.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error loading OTP settings");
                OtpSettingsError::retrieval(e.to_string())
            })
    }

    /// Settings exactly as stored; never seeds
    pub async fn list_settings(&self) -> Result<Vec<OtpSetting>, OtpSettingsError> {
        self.store.list_all().await.map_err(|e| {
            tracing::error!(error = %e, "Error retrieving OTP settings");
            OtpSettingsError::retrieval(e.to_string())
        })
    }

    // ===== Update Operations =====

    /// Apply a batch with the chosen strategy
    pub async fn update(
        &self,
        strategy: UpdateStrategy,
        updates: &[OtpSettingUpdate],
    ) -> Result<u64, OtpSettingsError> {
        match strategy {
            UpdateStrategy::RecordSemantics => self
                .update_via_record_semantics(updates)
                .await
                .map(|saved| saved as u64),
            UpdateStrategy::DirectStatement => self.update_via_direct_statement(updates).await,
        }
    }

    /// Read each record, overwrite its flags, and save the batch in one transaction.
    ///
    /// Ids with no stored record are skipped without error.
    pub async fn update_via_record_semantics(
        &self,
        updates: &[OtpSettingUpdate],
    ) -> Result<usize, OtpSettingsError> {
        let updates = validate_updates(updates)?;

        let mut changed = Vec::with_capacity(updates.len());
        for update in &updates {
            let existing = self
                .store
                .find_by_id(update.id)
                .await
                .map_err(|e| Self::store_failure(UpdateStrategy::RecordSemantics, e))?;

            match existing {
                Some(record) => {
                    changed.push(record.with_flags(update.email_enabled, update.whatsapp_enabled))
                }
                None => tracing::debug!(id = %update.id, "Skipping update for unknown OTP setting"),
            }
        }

        if changed.is_empty() {
            return Ok(0);
        }

        let saved = self
            .store
            .save_all(&changed)
            .await
            .map_err(|e| Self::store_failure(UpdateStrategy::RecordSemantics, e))?;

        tracing::info!(
            requested = updates.len(),
            saved,
            "OTP settings updated successfully using record semantics"
        );
        Ok(saved)
    }

    /// Issue one parameterized UPDATE per entry inside a single transaction
    pub async fn update_via_direct_statement(
        &self,
        updates: &[OtpSettingUpdate],
    ) -> Result<u64, OtpSettingsError> {
        let updates = validate_updates(updates)?;

        if updates.is_empty() {
            return Ok(0);
        }

        let affected = self
            .store
            .execute_flag_updates(&updates)
            .await
            .map_err(|e| Self::store_failure(UpdateStrategy::DirectStatement, e))?;

        tracing::info!(
            requested = updates.len(),
            affected,
            "OTP settings updated successfully using direct SQL"
        );
        Ok(affected)
    }

    /// Single-record read-modify-write; `false` when no record has this id
    pub async fn set_channels(
        &self,
        id: Uuid,
        email_enabled: bool,
        whatsapp_enabled: bool,
    ) -> Result<bool, OtpSettingsError> {
        if id.is_nil() {
            return Err(OtpSettingsError::validation("id must not be the nil UUID"));
        }

        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| Self::store_failure(UpdateStrategy::RecordSemantics, e))?;

        let Some(record) = existing else {
            return Ok(false);
        };

        if record.differs_from(email_enabled, whatsapp_enabled) {
            self.store
                .update_flags(id, email_enabled, whatsapp_enabled)
                .await
                .map_err(|e| Self::store_failure(UpdateStrategy::RecordSemantics, e))?;
        }

        Ok(true)
    }

    // ===== Helper Methods =====

    fn store_failure(strategy: UpdateStrategy, error: anyhow::Error) -> OtpSettingsError {
        tracing::error!(error = %error, ?strategy, "Error updating OTP settings");
        OtpSettingsError::store(error.to_string())
    }
}
