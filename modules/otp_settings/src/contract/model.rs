//! Contract models for OTP settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use super::error::OtpSettingsError;
use uuid::Uuid;

/// Notification channel preferences for a single action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSetting {
    /// Record identifier, assigned once at seeding
    pub id: Uuid,
    /// Action label (e.g., "Withdrawal"), unique per record
    pub action: Option<String>,
    /// Send the OTP via email
    pub email_enabled: bool,
    /// Send the OTP via Whatsapp
    pub whatsapp_enabled: bool,
}

impl OtpSetting {
    /// Create a fresh record for an action with both channels disabled
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: Some(action.into()),
            email_enabled: false,
            whatsapp_enabled: false,
        }
    }

    /// Read-modify-write step: same identity, new channel flags
    #[must_use]
    pub fn with_flags(self, email_enabled: bool, whatsapp_enabled: bool) -> Self {
        Self {
            email_enabled,
            whatsapp_enabled,
            ..self
        }
    }

    /// Whether applying the flags would change anything
    pub fn differs_from(&self, email_enabled: bool, whatsapp_enabled: bool) -> bool {
        self.email_enabled != email_enabled || self.whatsapp_enabled != whatsapp_enabled
    }
}

/// Caller-supplied update; `id` may be missing when the input is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSettingUpdate {
    pub id: Option<Uuid>,
    pub email_enabled: bool,
    pub whatsapp_enabled: bool,
}

impl OtpSettingUpdate {
    pub fn new(id: Uuid, email_enabled: bool, whatsapp_enabled: bool) -> Self {
        Self {
            id: Some(id),
            email_enabled,
            whatsapp_enabled,
        }
    }
}

/// Validated update handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagUpdate {
    pub id: Uuid,
    pub email_enabled: bool,
    pub whatsapp_enabled: bool,
}

/// Persistence strategy for a batch update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Read each record, overwrite its flags, save the entities in one transaction
    RecordSemantics,
    /// Parameterized UPDATE statements inside one explicit transaction
    DirectStatement,
}

impl UpdateStrategy {
    pub fn success_message(self) -> &'static str {
        match self {
            Self::RecordSemantics => "OTP settings updated successfully!",
            Self::DirectStatement => "OTP settings updated successfully using SQL!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::RecordSemantics => "Error updating OTP settings. Please try again.",
            Self::DirectStatement => "Error updating OTP settings with SQL. Please try again.",
        }
    }
}

/// Result of an operation as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub success: bool,
    pub message: String,
}

impl OperationOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// What the caller is told about a failed update: validation messages
    /// pass through, store causes are replaced by the strategy's message
    pub fn failed_update(strategy: UpdateStrategy, error: &OtpSettingsError) -> Self {
        match error {
            OtpSettingsError::Validation { message } => Self::failure(message.clone()),
            OtpSettingsError::Store { .. } | OtpSettingsError::Retrieval { .. } => {
                Self::failure(strategy.failure_message())
            }
        }
    }
}
