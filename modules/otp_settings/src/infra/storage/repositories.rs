//! SeaORM store implementation

use crate::contract::{FlagUpdate, OtpSetting};
use crate::domain::repository::OtpSettingsStore;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{entity, mapper};

pub struct SeaOrmOtpSettingsStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOtpSettingsStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtpSettingsStore for SeaOrmOtpSettingsStore {
    async fn list_all(&self) -> Result<Vec<OtpSetting>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Action)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<OtpSetting>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn insert_many(&self, records: &[OtpSetting]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let models: Vec<entity::ActiveModel> = records.iter().map(Into::into).collect();
        entity::Entity::insert_many(models).exec(&*self.db).await?;

        Ok(())
    }

    async fn update_flags(
        &self,
        id: Uuid,
        email_enabled: bool,
        whatsapp_enabled: bool,
    ) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(entity::Column::EmailEnabled, Expr::value(email_enabled))
            .col_expr(entity::Column::WhatsappEnabled, Expr::value(whatsapp_enabled))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn save_all(&self, records: &[OtpSetting]) -> Result<usize> {
        let txn = self.db.begin().await?;
        let result = save_records(&txn, records).await;
        finish(txn, result).await
    }

    async fn execute_flag_updates(&self, updates: &[FlagUpdate]) -> Result<u64> {
        let backend = self.db.get_database_backend();
        let sql = update_flags_sql(backend);

        let txn = self.db.begin().await?;
        let result = async {
            let mut affected = 0;
            for update in updates {
                let statement = Statement::from_sql_and_values(
                    backend,
                    sql,
                    [
                        update.email_enabled.into(),
                        update.whatsapp_enabled.into(),
                        update.id.into(),
                    ],
                );
                affected += txn.execute(statement).await?.rows_affected();
            }
            Ok::<_, anyhow::Error>(affected)
        }
        .await;

        finish(txn, result).await
    }
}

async fn save_records(txn: &DatabaseTransaction, records: &[OtpSetting]) -> Result<usize> {
    let mut saved = 0;
    for record in records {
        match entity::Entity::update(mapper::to_update_model(record))
            .exec(txn)
            .await
        {
            Ok(_) => saved += 1,
            // Row vanished between read and save
            Err(DbErr::RecordNotUpdated) => {
                tracing::warn!(id = %record.id, "OTP setting no longer exists; skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(saved)
}

/// Commit on success, otherwise roll back and hand back the original error
async fn finish<T>(txn: DatabaseTransaction, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(error = %rollback_err, "Failed to roll back OTP settings transaction");
            }
            Err(e)
        }
    }
}

fn update_flags_sql(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => {
            "UPDATE tb_otp_setting SET email_enabled = $1, whatsapp_enabled = $2 WHERE id = $3"
        }
        _ => {
            "UPDATE tb_otp_setting SET email_enabled = ?, whatsapp_enabled = ? WHERE id = ?"
        }
    }
}
