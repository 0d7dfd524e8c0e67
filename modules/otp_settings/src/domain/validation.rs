//! Input validation for updates and action names

use crate::contract::{FlagUpdate, OtpSettingUpdate, OtpSettingsError};
use std::collections::HashSet;

/// Width of the `action` column
pub const MAX_ACTION_LENGTH: usize = 100;

/// Check every update carries a usable id.
///
/// The whole batch is rejected on the first malformed entry, so nothing
/// reaches the store.
pub fn validate_updates(updates: &[OtpSettingUpdate]) -> Result<Vec<FlagUpdate>, OtpSettingsError> {
    updates
        .iter()
        .enumerate()
        .map(|(index, update)| match update.id {
            Some(id) if !id.is_nil() => Ok(FlagUpdate {
                id,
                email_enabled: update.email_enabled,
                whatsapp_enabled: update.whatsapp_enabled,
            }),
            Some(_) => Err(OtpSettingsError::validation(format!(
                "update #{index}: id must not be the nil UUID"
            ))),
            None => Err(OtpSettingsError::validation(format!(
                "update #{index}: id is required"
            ))),
        })
        .collect()
}

/// Validate a single action label
pub fn validate_action(action: &str) -> Result<(), OtpSettingsError> {
    if action.trim().is_empty() {
        return Err(OtpSettingsError::validation("action cannot be empty"));
    }

    let length = action.chars().count();
    if length > MAX_ACTION_LENGTH {
        return Err(OtpSettingsError::validation(format!(
            "action '{action}' is {length} characters long, maximum is {MAX_ACTION_LENGTH}"
        )));
    }

    Ok(())
}

/// Validate a list of action labels, including uniqueness
pub fn validate_actions(actions: &[String]) -> Result<(), OtpSettingsError> {
    let mut seen = HashSet::new();
    for action in actions {
        validate_action(action)?;
        if !seen.insert(action.as_str()) {
            return Err(OtpSettingsError::validation(format!(
                "action '{action}' is listed more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn accepts_well_formed_updates() {
        let id = Uuid::new_v4();
        let validated = validate_updates(&[OtpSettingUpdate::new(id, true, false)]).unwrap();

        assert_eq!(
            validated,
            vec![FlagUpdate {
                id,
                email_enabled: true,
                whatsapp_enabled: false
            }]
        );
    }

    #[test]
    fn rejects_missing_id() {
        let updates = vec![
            OtpSettingUpdate::new(Uuid::new_v4(), true, true),
            OtpSettingUpdate {
                id: None,
                email_enabled: true,
                whatsapp_enabled: false,
            },
        ];

        let err = validate_updates(&updates).unwrap_err();
        assert!(matches!(err, OtpSettingsError::Validation { ref message } if message.contains("#1")));
    }

    #[test]
    fn rejects_nil_id() {
        let err = validate_updates(&[OtpSettingUpdate::new(Uuid::nil(), false, false)]).unwrap_err();
        assert!(matches!(err, OtpSettingsError::Validation { .. }));
    }

    #[test]
    fn empty_batch_is_valid() {
        assert!(validate_updates(&[]).unwrap().is_empty());
    }

    #[test]
    fn action_length_is_bounded() {
        assert!(validate_action(&"a".repeat(MAX_ACTION_LENGTH)).is_ok());
        assert!(validate_action(&"a".repeat(MAX_ACTION_LENGTH + 1)).is_err());
        assert!(validate_action("   ").is_err());
    }

    #[test]
    fn duplicate_actions_are_rejected() {
        let actions = vec!["Withdrawal".to_owned(), "Withdrawal".to_owned()];
        assert!(validate_actions(&actions).is_err());
    }
}
