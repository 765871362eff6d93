//! Per-call backend selection.
//!
//! Every operation consults the connectivity monitor and dispatches to the
//! relational store or the in-memory mirror. Reads degrade to the mirror on
//! any store error so listing and lookup never hard-fail on connectivity.
//! Writes only reach the mirror when the store was never reachable; a write
//! that fails against a reachable store surfaces as an error instead of
//! silently dropping the caller's data.

use async_trait::async_trait;
use tracing::warn;

use crate::mirror::Mirror;
use crate::models::booking::{BookingRecord, NewBooking};
use crate::models::property::{NewProperty, PropertyRecord};
use crate::models::user::{AuthenticatedUser, NewUser, UserSummary, UserUpdate};
use crate::monitor::ConnectivityMonitor;
use crate::services::booking_service::{BookingError, BookingService};
use crate::services::booking_service_impl::SeaOrmBookingService;
use crate::services::property_service::{PropertyError, PropertyService};
use crate::services::property_service_impl::SeaOrmPropertyService;
use crate::services::user_service::{UserError, UserService};
use crate::services::user_service_impl::SeaOrmUserService;

pub struct FailoverPropertyService {
    store: Option<SeaOrmPropertyService>,
    mirror: Mirror,
    monitor: ConnectivityMonitor,
}

impl FailoverPropertyService {
    #[must_use]
    pub const fn new(
        store: Option<SeaOrmPropertyService>,
        mirror: Mirror,
        monitor: ConnectivityMonitor,
    ) -> Self {
        Self {
            store,
            mirror,
            monitor,
        }
    }

    fn store_backend(&self) -> Option<&SeaOrmPropertyService> {
        if self.monitor.is_available() {
            self.store.as_ref()
        } else {
            None
        }
    }
}

#[async_trait]
impl PropertyService for FailoverPropertyService {
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, PropertyError> {
        if let Some(store) = self.store_backend() {
            match store.list_properties().await {
                Ok(rows) => return Ok(rows),
                Err(err) => warn!("Store failed listing properties, serving fallback: {err}"),
            }
        }
        self.mirror.list_properties().await
    }

    async fn get_property(&self, id: i32) -> Result<PropertyRecord, PropertyError> {
        if let Some(store) = self.store_backend() {
            match store.get_property(id).await {
                Err(PropertyError::Database(err)) => {
                    warn!("Store failed fetching property {id}, serving fallback: {err}");
                }
                other => return other,
            }
        }
        self.mirror.get_property(id).await
    }

    async fn create_property(&self, input: NewProperty) -> Result<PropertyRecord, PropertyError> {
        if let Some(store) = self.store_backend() {
            return store.create_property(input).await;
        }
        self.mirror.create_property(input).await
    }
}

pub struct FailoverBookingService {
    store: Option<SeaOrmBookingService>,
    mirror: Mirror,
    monitor: ConnectivityMonitor,
}

impl FailoverBookingService {
    #[must_use]
    pub const fn new(
        store: Option<SeaOrmBookingService>,
        mirror: Mirror,
        monitor: ConnectivityMonitor,
    ) -> Self {
        Self {
            store,
            mirror,
            monitor,
        }
    }

    fn store_backend(&self) -> Option<&SeaOrmBookingService> {
        if self.monitor.is_available() {
            self.store.as_ref()
        } else {
            None
        }
    }
}

#[async_trait]
impl BookingService for FailoverBookingService {
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingError> {
        if let Some(store) = self.store_backend() {
            match store.list_bookings().await {
                Ok(rows) => return Ok(rows),
                Err(err) => warn!("Store failed listing bookings, serving fallback: {err}"),
            }
        }
        self.mirror.list_bookings().await
    }

    async fn create_booking(&self, input: NewBooking) -> Result<BookingRecord, BookingError> {
        if let Some(store) = self.store_backend() {
            return store.create_booking(input).await;
        }
        self.mirror.create_booking(input).await
    }
}

pub struct FailoverUserService {
    store: Option<SeaOrmUserService>,
    mirror: Mirror,
    monitor: ConnectivityMonitor,
}

impl FailoverUserService {
    #[must_use]
    pub const fn new(
        store: Option<SeaOrmUserService>,
        mirror: Mirror,
        monitor: ConnectivityMonitor,
    ) -> Self {
        Self {
            store,
            mirror,
            monitor,
        }
    }

    fn store_backend(&self) -> Option<&SeaOrmUserService> {
        if self.monitor.is_available() {
            self.store.as_ref()
        } else {
            None
        }
    }
}

#[async_trait]
impl UserService for FailoverUserService {
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, UserError> {
        if let Some(store) = self.store_backend() {
            match store.authenticate(identifier, password).await {
                Err(UserError::Database(err)) => {
                    warn!("Store failed authenticating, checking fallback users: {err}");
                }
                other => return other,
            }
        }
        self.mirror.authenticate(identifier, password).await
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, UserError> {
        if let Some(store) = self.store_backend() {
            match store.list_users().await {
                Ok(rows) => return Ok(rows),
                Err(err) => warn!("Store failed listing users, serving fallback: {err}"),
            }
        }
        self.mirror.list_users().await
    }

    async fn create_user(&self, input: NewUser) -> Result<UserSummary, UserError> {
        if let Some(store) = self.store_backend() {
            return store.create_user(input).await;
        }
        self.mirror.create_user(input).await
    }

    async fn update_user(&self, id: i32, update: UserUpdate) -> Result<UserSummary, UserError> {
        if let Some(store) = self.store_backend() {
            return store.update_user(id, update).await;
        }
        self.mirror.update_user(id, update).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), UserError> {
        if let Some(store) = self.store_backend() {
            return store.delete_user(id).await;
        }
        self.mirror.delete_user(id).await
    }
}
