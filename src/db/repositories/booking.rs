use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::{bookings, prelude::*, properties};
use crate::models::booking::{BookingRecord, NewBooking};

pub struct BookingRepository {
    conn: DatabaseConnection,
}

impl BookingRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: bookings::Model, property: Option<properties::Model>) -> BookingRecord {
        BookingRecord {
            id: model.id,
            property_id: model.property_id,
            guest_name: model.guest_name,
            guest_email: model.guest_email,
            check_in: model.check_in,
            check_out: model.check_out,
            guests: model.guests,
            total_price: model.total_price,
            status: model.status,
            created_at: model.created_at,
            property_title: property.map(|p| p.title),
        }
    }

    /// Most recent first, with the referenced property's title attached.
    pub async fn list(&self) -> Result<Vec<BookingRecord>> {
        let rows = Bookings::find()
            .order_by_desc(bookings::Column::CreatedAt)
            .order_by_desc(bookings::Column::Id)
            .find_also_related(Properties)
            .all(&self.conn)
            .await
            .context("Failed to list bookings")?;

        Ok(rows
            .into_iter()
            .map(|(booking, property)| Self::map_model(booking, property))
            .collect())
    }

    pub async fn insert(&self, input: NewBooking) -> Result<BookingRecord> {
        let active = bookings::ActiveModel {
            property_id: Set(input.property_id),
            guest_name: Set(input.guest_name),
            guest_email: Set(input.guest_email),
            check_in: Set(input.check_in),
            check_out: Set(input.check_out),
            guests: Set(input.guests.unwrap_or(1)),
            total_price: Set(input.total_price),
            status: Set("pending".to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert booking")?;

        Ok(Self::map_model(model, None))
    }
}
