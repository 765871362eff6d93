//! In-memory fallback backend.
//!
//! Process-local collections mimicking the relational store's entities,
//! seeded with sample listings and one admin account, served whenever the
//! store is unreachable. Ids come from per-collection monotonic counters so
//! a delete can never cause an id to be reissued.
//!
//! The lock makes concurrent access memory-safe, but this remains a
//! degraded, non-durable mode: writers interleave at operation granularity
//! and everything is lost with the process.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::models::booking::{BookingRecord, NewBooking};
use crate::models::property::{DEFAULT_PROPERTY_STATUS, NewProperty, PropertyRecord};
use crate::models::user::{
    AuthenticatedUser, DEFAULT_USER_ROLE, DEFAULT_USER_STATUS, NewUser, UserSummary, UserUpdate,
    date_only,
};
use crate::services::booking_service::{BookingError, BookingService};
use crate::services::property_service::{PropertyError, PropertyService};
use crate::services::user_service::{UserError, UserService};

#[derive(Debug, Clone)]
struct MirrorUser {
    id: i32,
    username: String,
    email: String,
    password: String,
    name: String,
    phone: String,
    role: String,
    status: String,
    created_at: String,
    last_login: Option<String>,
}

impl MirrorUser {
    fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            role: self.role.clone(),
            status: self.status.clone(),
            registered_date: date_only(&self.created_at),
            last_login: self
                .last_login
                .as_deref()
                .map_or_else(|| "-".to_string(), date_only),
        }
    }

    fn authenticated(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            status: self.status.clone(),
        }
    }
}

struct MirrorInner {
    properties: Vec<PropertyRecord>,
    bookings: Vec<BookingRecord>,
    users: Vec<MirrorUser>,
    next_property_id: i32,
    next_booking_id: i32,
    next_user_id: i32,
}

#[derive(Clone)]
pub struct Mirror {
    inner: Arc<RwLock<MirrorInner>>,
}

impl Mirror {
    /// Sample listings (ids 1 and 2), an empty bookings collection and one
    /// admin account.
    #[must_use]
    pub fn seeded() -> Self {
        let now = chrono::Utc::now().to_rfc3339();

        let properties = vec![
            PropertyRecord {
                id: 1,
                title: "Villa Azure Vista".to_string(),
                description: Some("Luxurious villa with stunning ocean views".to_string()),
                price: Decimal::new(250, 0),
                location: "Martil Beach".to_string(),
                city: Some("Martil".to_string()),
                bedrooms: Some(4),
                bathrooms: Some(3),
                image_url: Some("/placeholder.svg".to_string()),
                amenities: vec![
                    "WiFi".to_string(),
                    "Pool".to_string(),
                    "Kitchen".to_string(),
                    "Parking".to_string(),
                ],
                status: "approved".to_string(),
                featured: true,
                created_at: now.clone(),
            },
            PropertyRecord {
                id: 2,
                title: "Coastal Retreat".to_string(),
                description: Some("Modern apartment near the beach".to_string()),
                price: Decimal::new(150, 0),
                location: "Marina District".to_string(),
                city: Some("Martil".to_string()),
                bedrooms: Some(2),
                bathrooms: Some(2),
                image_url: Some("/placeholder.svg".to_string()),
                amenities: vec![
                    "WiFi".to_string(),
                    "Air Conditioning".to_string(),
                    "Kitchen".to_string(),
                ],
                status: "approved".to_string(),
                featured: true,
                created_at: now.clone(),
            },
        ];

        let users = vec![MirrorUser {
            id: 1,
            username: "admin".to_string(),
            email: "admin@stayhaven.dev".to_string(),
            password: "admin123".to_string(),
            name: "Admin User".to_string(),
            phone: String::new(),
            role: "admin".to_string(),
            status: "active".to_string(),
            created_at: now,
            last_login: None,
        }];

        Self {
            inner: Arc::new(RwLock::new(MirrorInner {
                properties,
                bookings: Vec::new(),
                users,
                next_property_id: 3,
                next_booking_id: 1,
                next_user_id: 2,
            })),
        }
    }
}

#[async_trait]
impl PropertyService for Mirror {
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, PropertyError> {
        let inner = self.inner.read().await;
        Ok(inner.properties.iter().rev().cloned().collect())
    }

    async fn get_property(&self, id: i32) -> Result<PropertyRecord, PropertyError> {
        let inner = self.inner.read().await;
        inner
            .properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PropertyError::NotFound(id))
    }

    async fn create_property(&self, input: NewProperty) -> Result<PropertyRecord, PropertyError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_property_id;
        inner.next_property_id += 1;

        let record = PropertyRecord {
            id,
            title: input.title,
            description: input.description,
            price: input.price,
            location: input.location,
            city: input.city,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            image_url: input.image_url,
            amenities: input.amenities,
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_PROPERTY_STATUS.to_string()),
            featured: input.featured,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        inner.properties.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl BookingService for Mirror {
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingError> {
        let inner = self.inner.read().await;

        Ok(inner
            .bookings
            .iter()
            .rev()
            .map(|booking| {
                let title = inner
                    .properties
                    .iter()
                    .find(|p| p.id == booking.property_id)
                    .map(|p| p.title.clone());
                BookingRecord {
                    property_title: title,
                    ..booking.clone()
                }
            })
            .collect())
    }

    async fn create_booking(&self, input: NewBooking) -> Result<BookingRecord, BookingError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_booking_id;
        inner.next_booking_id += 1;

        // The property reference is unchecked here; referential integrity
        // only exists while the relational store is active.
        let record = BookingRecord {
            id,
            property_id: input.property_id,
            guest_name: input.guest_name,
            guest_email: input.guest_email,
            check_in: input.check_in,
            check_out: input.check_out,
            guests: input.guests.unwrap_or(1),
            total_price: input.total_price,
            status: "pending".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            property_title: None,
        };

        inner.bookings.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl UserService for Mirror {
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, UserError> {
        let mut inner = self.inner.write().await;

        let user = inner
            .users
            .iter_mut()
            .find(|u| (u.username == identifier || u.email == identifier) && u.password == password)
            .ok_or(UserError::InvalidCredentials)?;

        user.last_login = Some(chrono::Utc::now().to_rfc3339());
        Ok(user.authenticated())
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, UserError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().rev().map(MirrorUser::summary).collect())
    }

    async fn create_user(&self, input: NewUser) -> Result<UserSummary, UserError> {
        let mut inner = self.inner.write().await;

        let taken = inner
            .users
            .iter()
            .any(|u| u.username == input.username || u.email == input.email);
        if taken {
            return Err(UserError::Duplicate);
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = MirrorUser {
            id,
            username: input.username,
            email: input.email,
            password: input.password,
            name: input.name,
            phone: input.phone.unwrap_or_default(),
            role: input.role.unwrap_or_else(|| DEFAULT_USER_ROLE.to_string()),
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_USER_STATUS.to_string()),
            created_at: chrono::Utc::now().to_rfc3339(),
            last_login: None,
        };

        let summary = user.summary();
        inner.users.push(user);
        Ok(summary)
    }

    async fn update_user(&self, id: i32, update: UserUpdate) -> Result<UserSummary, UserError> {
        let mut inner = self.inner.write().await;

        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserError::NotFound(id))?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(status) = update.status {
            user.status = status;
        }

        Ok(user.summary())
    }

    async fn delete_user(&self, id: i32) -> Result<(), UserError> {
        let mut inner = self.inner.write().await;

        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);

        if inner.users.len() == before {
            Err(UserError::NotFound(id))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            name: "Test User".to_string(),
            phone: None,
            role: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn seeds_two_properties_and_one_admin() {
        let mirror = Mirror::seeded();

        let properties = mirror.list_properties().await.unwrap();
        let mut ids: Vec<i32> = properties.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);

        let users = mirror.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, "admin");
        assert_eq!(users[0].last_login, "-");
    }

    #[tokio::test]
    async fn property_ids_stay_monotonic() {
        let mirror = Mirror::seeded();

        let created = mirror
            .create_property(NewProperty {
                title: "Hillside Cabin".to_string(),
                description: None,
                price: Decimal::new(80, 0),
                location: "Hill Road".to_string(),
                city: None,
                bedrooms: None,
                bathrooms: None,
                image_url: None,
                amenities: Vec::new(),
                featured: false,
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(created.status, "approved");
        assert_eq!(mirror.list_properties().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn user_ids_are_never_reissued_after_delete() {
        let mirror = Mirror::seeded();

        let first = mirror.create_user(sample_user("ana", "ana@x.io")).await.unwrap();
        assert_eq!(first.id, 2);

        mirror.delete_user(first.id).await.unwrap();

        let second = mirror.create_user(sample_user("bob", "bob@x.io")).await.unwrap();
        assert_eq!(second.id, 3);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_regardless_of_username() {
        let mirror = Mirror::seeded();

        mirror.create_user(sample_user("ana", "ana@x.io")).await.unwrap();
        let err = mirror
            .create_user(sample_user("other", "ana@x.io"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Duplicate));
    }

    #[tokio::test]
    async fn authenticate_matches_username_or_email_exactly() {
        let mirror = Mirror::seeded();

        let err = mirror.authenticate("admin", "wrong").await.unwrap_err();
        assert!(matches!(err, UserError::InvalidCredentials));

        let user = mirror
            .authenticate("admin@stayhaven.dev", "admin123")
            .await
            .unwrap();
        assert_eq!(user.username, "admin");

        let users = mirror.list_users().await.unwrap();
        assert_ne!(users[0].last_login, "-");
    }

    #[tokio::test]
    async fn delete_missing_user_reports_not_found() {
        let mirror = Mirror::seeded();

        let err = mirror.delete_user(99).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(99)));
    }
}
