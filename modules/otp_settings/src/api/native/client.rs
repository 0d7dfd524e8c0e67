//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    OtpSetting, OtpSettingUpdate, OtpSettingsApi, OtpSettingsError, UpdateStrategy,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl OtpSettingsApi for NativeClient {
    async fn get_settings(&self) -> Result<Vec<OtpSetting>, OtpSettingsError> {
        self.service.get_settings().await
    }

    async fn list_settings(&self) -> Result<Vec<OtpSetting>, OtpSettingsError> {
        self.service.list_settings().await
    }

    async fn update_settings(
        &self,
        strategy: UpdateStrategy,
        updates: Vec<OtpSettingUpdate>,
    ) -> Result<u64, OtpSettingsError> {
        self.service.update(strategy, &updates).await
    }

    async fn set_channels(
        &self,
        id: Uuid,
        email_enabled: bool,
        whatsapp_enabled: bool,
    ) -> Result<bool, OtpSettingsError> {
        self.service
            .set_channels(id, email_enabled, whatsapp_enabled)
            .await
    }
}
