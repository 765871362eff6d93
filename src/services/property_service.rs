//! Backend-agnostic property operations.
//!
//! Both the relational store and the in-memory fallback implement this
//! trait; callers receive the same normalized records either way.

use thiserror::Error;

use crate::models::property::{NewProperty, PropertyRecord};

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Property {0} not found")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for PropertyError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for PropertyError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait PropertyService: Send + Sync {
    /// Returns every property, most recent first.
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, PropertyError>;

    /// # Errors
    ///
    /// Returns [`PropertyError::NotFound`] when no property holds the id.
    async fn get_property(&self, id: i32) -> Result<PropertyRecord, PropertyError>;

    /// Persists a new listing and returns it with its generated id.
    async fn create_property(&self, input: NewProperty) -> Result<PropertyRecord, PropertyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_error_display() {
        let err = PropertyError::NotFound(42);
        assert_eq!(err.to_string(), "Property 42 not found");

        let err = PropertyError::Validation("Title is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: Title is required");
    }
}
