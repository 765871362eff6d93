use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::api::validation::{require_field, require_price};
use crate::models::property::{NewProperty, PropertyRecord};

#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[serde(default)]
    pub location: String,
    pub city: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub status: Option<String>,
}

impl CreatePropertyRequest {
    fn into_input(self) -> Result<NewProperty, ApiError> {
        Ok(NewProperty {
            title: require_field(&self.title, "title")?,
            description: self.description,
            price: require_price(self.price)?,
            location: require_field(&self.location, "location")?,
            city: self.city,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            image_url: self.image_url,
            amenities: self.amenities,
            featured: self.featured,
            status: self.status,
        })
    }
}

/// GET /properties
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PropertyRecord>>, ApiError> {
    Ok(Json(state.properties.list_properties().await?))
}

/// GET /properties/{id}
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<PropertyRecord>, ApiError> {
    Ok(Json(state.properties.get_property(id).await?))
}

/// POST /properties
pub async fn create_property(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyRecord>), ApiError> {
    let input = payload.into_input()?;
    let created = state.properties.create_property(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
