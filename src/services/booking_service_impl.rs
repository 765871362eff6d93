//! `SeaORM` implementation of the `BookingService` trait.

use async_trait::async_trait;

use crate::db::Store;
use crate::models::booking::{BookingRecord, NewBooking};
use crate::services::booking_service::{BookingError, BookingService};

pub struct SeaOrmBookingService {
    store: Store,
}

impl SeaOrmBookingService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingService for SeaOrmBookingService {
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingError> {
        Ok(self.store.list_bookings().await?)
    }

    async fn create_booking(&self, input: NewBooking) -> Result<BookingRecord, BookingError> {
        Ok(self.store.insert_booking(input).await?)
    }
}
