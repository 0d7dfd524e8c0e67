//! Default seeding of the canonical action records
//!
//! Seeding happens once: a store holding at least one record is never
//! re-seeded, even if its contents drifted from the action list.

use super::repository::OtpSettingsStore;
use crate::contract::OtpSetting;
use anyhow::Result;

/// Actions seeded into an empty store, in order
pub const DEFAULT_ACTIONS: [&str; 4] = [
    "Checklist All",
    "Withdrawal",
    "Forgot Password",
    "Reset Password",
];

/// Seed-once policy over an ordered list of action names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedingPolicy {
    actions: Vec<String>,
}

impl Default for SeedingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIONS.iter().map(|a| (*a).to_owned()).collect())
    }
}

impl SeedingPolicy {
    pub fn new(actions: Vec<String>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// One fresh record per action, both channels disabled
    pub fn default_records(&self) -> Vec<OtpSetting> {
        self.actions.iter().map(OtpSetting::new).collect()
    }

    /// Seed the store if it is empty, then return its full contents
    pub async fn ensure_seeded(&self, store: &dyn OtpSettingsStore) -> Result<Vec<OtpSetting>> {
        let existing = store.list_all().await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        let defaults = self.default_records();
        if let Err(e) = store.insert_many(&defaults).await {
            // A concurrent first read may have seeded in the meantime
            let current = store.list_all().await?;
            if current.is_empty() {
                return Err(e);
            }
            tracing::debug!(error = %e, "Default OTP settings already created concurrently");
            return Ok(current);
        }
        tracing::info!(count = defaults.len(), "Default OTP settings created");

        store.list_all().await
    }
}
