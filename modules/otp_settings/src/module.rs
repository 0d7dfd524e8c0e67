//! Module declaration and lifecycle: migrate, init, register REST, expose client

use crate::config::Config;
use crate::contract::OtpSettingsApi;
use crate::domain::Service;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// OTP settings module
#[derive(Default)]
pub struct OtpSettingsModule {
    service: RwLock<Option<Arc<Service>>>,
}

impl OtpSettingsModule {
    /// Validate configuration and build the domain service on top of the database
    pub fn init(&self, cfg: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        cfg.validate()?;

        let store = Arc::new(crate::infra::storage::repositories::SeaOrmOtpSettingsStore::new(db));
        let service = Arc::new(Service::new(store, cfg.seeding_policy()));

        tracing::info!(
            default_actions = cfg.default_actions.len(),
            "OTP settings service initialized"
        );

        *self.service.write() = Some(service);
        Ok(())
    }

    /// Run pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("OTP settings migrations completed");
        Ok(())
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering OTP settings REST routes");
        crate::api::rest::routes::register_routes(router, service)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn OtpSettingsApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
            .cloned()
    }
}
