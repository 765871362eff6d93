use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::api::validation::{require_field, require_property_reference};
use crate::models::booking::{BookingRecord, NewBooking};

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub property_id: Option<i32>,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    pub guests: Option<i32>,
    pub total_price: Option<Decimal>,
}

impl CreateBookingRequest {
    fn into_input(self) -> Result<NewBooking, ApiError> {
        Ok(NewBooking {
            property_id: require_property_reference(self.property_id)?,
            guest_name: require_field(&self.guest_name, "guest_name")?,
            guest_email: require_field(&self.guest_email, "guest_email")?,
            check_in: require_field(&self.check_in, "check_in")?,
            check_out: require_field(&self.check_out, "check_out")?,
            guests: self.guests,
            total_price: self.total_price,
        })
    }
}

/// GET /bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookingRecord>>, ApiError> {
    Ok(Json(state.bookings.list_bookings().await?))
}

/// POST /bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingRecord>), ApiError> {
    let input = payload.into_input()?;
    let created = state.bookings.create_booking(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
