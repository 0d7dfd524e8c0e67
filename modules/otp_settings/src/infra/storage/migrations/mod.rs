//! Database migrations for OTP settings

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250812_000001_create_otp_setting::Migration)]
    }
}

mod m20250812_000001_create_otp_setting {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TbOtpSetting::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TbOtpSetting::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(TbOtpSetting::Action).string_len(100))
                        .col(
                            ColumnDef::new(TbOtpSetting::EmailEnabled)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(TbOtpSetting::WhatsappEnabled)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_tb_otp_setting_action")
                        .table(TbOtpSetting::Table)
                        .col(TbOtpSetting::Action)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TbOtpSetting::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TbOtpSetting {
        Table,
        Id,
        Action,
        EmailEnabled,
        WhatsappEnabled,
    }
}
