//! Module declaration and lifecycle

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::CinemaApi;
use crate::domain::Service;
use crate::infra::storage::{
    migrations::Migrator, SeaOrmBookingRepository, SeaOrmMovieRepository, SeaOrmShowtimeRepository,
};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Cinema service module
pub struct CinemaServiceModule {
    config: Config,
    service: Arc<Service>,
}

impl CinemaServiceModule {
    /// Build repositories and the domain service on top of `db`
    pub fn init(db: DatabaseConnection, config: Config) -> Self {
        let conn = Arc::new(db);

        let movie_repo = Arc::new(SeaOrmMovieRepository::new(conn.clone()));
        let showtime_repo = Arc::new(SeaOrmShowtimeRepository::new(conn.clone()));
        let booking_repo = Arc::new(SeaOrmBookingRepository::new(conn));

        let service = Arc::new(Service::new(
            movie_repo,
            showtime_repo,
            booking_repo,
            config.clone(),
        ));

        tracing::info!("Cinema service initialized");
        Self { config, service }
    }

    /// Apply pending migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Cinema service migrations completed");
        Ok(())
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering cinema service REST routes");
        crate::api::rest::register_routes(router, self.service.clone())
    }

    /// In-process client backed by the domain service
    pub fn client(&self) -> Arc<dyn CinemaApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
