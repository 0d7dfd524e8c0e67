//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::OtpSetting;

impl From<entity::Model> for OtpSetting {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            action: entity.action,
            email_enabled: entity.email_enabled,
            whatsapp_enabled: entity.whatsapp_enabled,
        }
    }
}

/// Full insert of a new record
impl From<&OtpSetting> for entity::ActiveModel {
    fn from(model: &OtpSetting) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            action: Set(model.action.clone()),
            email_enabled: Set(model.email_enabled),
            whatsapp_enabled: Set(model.whatsapp_enabled),
        }
    }
}

/// Whole-entity save of an existing record: identity columns stay untouched
pub(crate) fn to_update_model(model: &OtpSetting) -> entity::ActiveModel {
    use sea_orm::ActiveValue::*;

    entity::ActiveModel {
        id: Unchanged(model.id),
        action: Unchanged(model.action.clone()),
        email_enabled: Set(model.email_enabled),
        whatsapp_enabled: Set(model.whatsapp_enabled),
    }
}
