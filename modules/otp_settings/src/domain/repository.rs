//! Store trait for OTP settings persistence
//!
//! This trait defines the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{FlagUpdate, OtpSetting};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Durable keyed storage for OTP settings
#[async_trait]
pub trait OtpSettingsStore: Send + Sync {
    /// List every stored record
    async fn list_all(&self) -> Result<Vec<OtpSetting>>;

    /// Find a record by identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OtpSetting>>;

    /// Insert records as a single batch
    async fn insert_many(&self, records: &[OtpSetting]) -> Result<()>;

    /// Overwrite the channel flags of one record; unknown ids are a no-op
    async fn update_flags(&self, id: Uuid, email_enabled: bool, whatsapp_enabled: bool)
        -> Result<()>;

    /// Save whole records inside one transaction, returning how many were written.
    ///
    /// Records missing from the store are skipped. Any other failure rolls the
    /// whole batch back.
    async fn save_all(&self, records: &[OtpSetting]) -> Result<usize>;

    /// Run one parameterized UPDATE per entry inside one transaction,
    /// returning the total number of affected rows.
    ///
    /// On failure the transaction is rolled back before the error is returned.
    async fn execute_flag_updates(&self, updates: &[FlagUpdate]) -> Result<u64>;
}
