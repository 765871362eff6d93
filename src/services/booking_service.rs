//! Backend-agnostic booking operations.

use thiserror::Error;

use crate::models::booking::{BookingRecord, NewBooking};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for BookingError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for BookingError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait BookingService: Send + Sync {
    /// Returns every booking, most recent first, with the referenced
    /// property's title attached where the property still exists.
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingError>;

    /// Persists a new booking; status starts as "pending".
    async fn create_booking(&self, input: NewBooking) -> Result<BookingRecord, BookingError>;
}
