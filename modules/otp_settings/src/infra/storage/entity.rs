//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// OTP settings table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tb_otp_setting")]
pub struct Model {
    /// Record identifier (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Action label, at most 100 characters
    pub action: Option<String>,

    /// Email channel flag
    pub email_enabled: bool,

    /// Whatsapp channel flag
    pub whatsapp_enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
