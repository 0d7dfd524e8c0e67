//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, OtpSettingsError};
use uuid::Uuid;

impl From<contract::OtpSetting> for OtpSettingDto {
    fn from(setting: contract::OtpSetting) -> Self {
        Self {
            id: setting.id,
            action: setting.action,
            email_enabled: setting.email_enabled,
            whatsapp_enabled: setting.whatsapp_enabled,
        }
    }
}

impl From<contract::OperationOutcome> for OperationOutcomeDto {
    fn from(outcome: contract::OperationOutcome) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
        }
    }
}

/// Blank ids map to `None` and are rejected by the service; unparsable ids
/// are rejected here.
impl TryFrom<UpdateOtpSettingRequest> for contract::OtpSettingUpdate {
    type Error = OtpSettingsError;

    fn try_from(req: UpdateOtpSettingRequest) -> Result<Self, Self::Error> {
        let id = req
            .id
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                Uuid::parse_str(raw)
                    .map_err(|e| OtpSettingsError::validation(format!("invalid id '{raw}': {e}")))
            })
            .transpose()?;

        Ok(Self {
            id,
            email_enabled: req.email_enabled,
            whatsapp_enabled: req.whatsapp_enabled,
        })
    }
}

impl SettingsListResponse {
    pub fn ok(settings: Vec<contract::OtpSetting>) -> Self {
        Self {
            success: true,
            message: None,
            data: settings.into_iter().map(Into::into).collect(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Vec::new(),
        }
    }
}
