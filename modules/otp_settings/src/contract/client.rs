//! Native client trait for inter-module communication
//!
//! Other modules use this trait to read and change OTP channel preferences.
//! NO HTTP - direct function calls.

use super::{
    error::OtpSettingsError,
    model::{OtpSetting, OtpSettingUpdate, UpdateStrategy},
};
use async_trait::async_trait;
use uuid::Uuid;

/// OTP settings API for inter-module communication
#[async_trait]
pub trait OtpSettingsApi: Send + Sync {
    /// Current settings, seeding the canonical actions on first use
    async fn get_settings(&self) -> Result<Vec<OtpSetting>, OtpSettingsError>;

    /// Current settings as stored, without seeding
    async fn list_settings(&self) -> Result<Vec<OtpSetting>, OtpSettingsError>;

    /// Apply a batch of flag updates with the given strategy
    async fn update_settings(
        &self,
        strategy: UpdateStrategy,
        updates: Vec<OtpSettingUpdate>,
    ) -> Result<u64, OtpSettingsError>;

    /// Change the channels of a single action; `false` if the id is unknown
    async fn set_channels(
        &self,
        id: Uuid,
        email_enabled: bool,
        whatsapp_enabled: bool,
    ) -> Result<bool, OtpSettingsError>;
}
