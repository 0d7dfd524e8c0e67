//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// OTP setting response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OtpSettingDto {
    /// Record identifier
    pub id: Uuid,

    /// Action label
    #[schema(example = "Withdrawal")]
    pub action: Option<String>,

    /// Email channel flag
    pub email_enabled: bool,

    /// Whatsapp channel flag
    pub whatsapp_enabled: bool,
}

/// One entry of an update request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOtpSettingRequest {
    /// Record identifier; blank or missing is rejected
    #[serde(default)]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Option<String>,

    /// Missing means unchecked
    #[serde(default)]
    pub email_enabled: bool,

    /// Missing means unchecked
    #[serde(default)]
    pub whatsapp_enabled: bool,
}

/// List of settings with a success flag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsListResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub data: Vec<OtpSettingDto>,
}

/// Outcome of an update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationOutcomeDto {
    pub success: bool,

    #[schema(example = "OTP settings updated successfully!")]
    pub message: String,
}
