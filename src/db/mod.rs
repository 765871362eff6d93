use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::models::booking::{BookingRecord, NewBooking};
use crate::models::property::{NewProperty, PropertyRecord};
use crate::models::user::{AuthenticatedUser, NewUser, UserSummary, UserUpdate};

pub mod migrator;
pub mod repositories;

/// Durable relational backend. Creating it connects and applies the
/// idempotent schema migrations; query errors propagate unchanged and are
/// classified by the service layer.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn connect(config: &Config) -> Result<Self> {
        Self::with_pool_options(
            &config.connection_url(),
            config.database.max_connections,
            config.database.min_connections,
        )
        .await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn property_repo(&self) -> repositories::property::PropertyRepository {
        repositories::property::PropertyRepository::new(self.conn.clone())
    }

    fn booking_repo(&self) -> repositories::booking::BookingRepository {
        repositories::booking::BookingRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn list_properties(&self) -> Result<Vec<PropertyRecord>> {
        self.property_repo().list().await
    }

    pub async fn get_property(&self, id: i32) -> Result<Option<PropertyRecord>> {
        self.property_repo().get(id).await
    }

    pub async fn insert_property(&self, input: NewProperty) -> Result<PropertyRecord> {
        self.property_repo().insert(input).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<BookingRecord>> {
        self.booking_repo().list().await
    }

    pub async fn insert_booking(&self, input: NewBooking) -> Result<BookingRecord> {
        self.booking_repo().insert(input).await
    }

    pub async fn authenticate_user(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>> {
        self.user_repo().authenticate(identifier, password).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        self.user_repo().list().await
    }

    pub async fn user_exists(&self, username: &str, email: &str) -> Result<bool> {
        self.user_repo().exists(username, email).await
    }

    pub async fn insert_user(&self, input: NewUser) -> Result<UserSummary> {
        self.user_repo().insert(input).await
    }

    pub async fn update_user(&self, id: i32, update: UserUpdate) -> Result<Option<UserSummary>> {
        self.user_repo().update(id, update).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<bool> {
        self.user_repo().delete(id).await
    }
}
