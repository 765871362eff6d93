//! `SeaORM` implementation of the `PropertyService` trait.

use async_trait::async_trait;

use crate::db::Store;
use crate::models::property::{NewProperty, PropertyRecord};
use crate::services::property_service::{PropertyError, PropertyService};

pub struct SeaOrmPropertyService {
    store: Store,
}

impl SeaOrmPropertyService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PropertyService for SeaOrmPropertyService {
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, PropertyError> {
        Ok(self.store.list_properties().await?)
    }

    async fn get_property(&self, id: i32) -> Result<PropertyRecord, PropertyError> {
        self.store
            .get_property(id)
            .await?
            .ok_or(PropertyError::NotFound(id))
    }

    async fn create_property(&self, input: NewProperty) -> Result<PropertyRecord, PropertyError> {
        Ok(self.store.insert_property(input).await?)
    }
}
