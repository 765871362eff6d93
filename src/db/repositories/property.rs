use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::{prelude::*, properties};
use crate::models::property::{DEFAULT_PROPERTY_STATUS, NewProperty, PropertyRecord};

pub struct PropertyRepository {
    conn: DatabaseConnection,
}

impl PropertyRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: properties::Model) -> PropertyRecord {
        PropertyRecord {
            id: model.id,
            title: model.title,
            description: model.description,
            price: model.price,
            location: model.location,
            city: model.city,
            bedrooms: model.bedrooms,
            bathrooms: model.bathrooms,
            image_url: model.image_url,
            amenities: model
                .amenities
                .and_then(|s| serde_json::from_str(&s).ok())
                .unwrap_or_default(),
            status: model.status,
            featured: model.featured,
            created_at: model.created_at,
        }
    }

    /// Most recent first.
    pub async fn list(&self) -> Result<Vec<PropertyRecord>> {
        let rows = Properties::find()
            .order_by_desc(properties::Column::CreatedAt)
            .order_by_desc(properties::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list properties")?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<PropertyRecord>> {
        let row = Properties::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query property by id")?;

        Ok(row.map(Self::map_model))
    }

    pub async fn insert(&self, input: NewProperty) -> Result<PropertyRecord> {
        let active = properties::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            price: Set(input.price),
            location: Set(input.location),
            city: Set(input.city),
            bedrooms: Set(input.bedrooms),
            bathrooms: Set(input.bathrooms),
            image_url: Set(input.image_url),
            amenities: Set(serde_json::to_string(&input.amenities).ok()),
            status: Set(input
                .status
                .unwrap_or_else(|| DEFAULT_PROPERTY_STATUS.to_string())),
            featured: Set(input.featured),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert property")?;

        Ok(Self::map_model(model))
    }
}
