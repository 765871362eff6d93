use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized booking shape served by every backend. `property_title` is
/// populated by the list operation; a freshly created booking omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: i32,
    pub property_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: i32,
    pub total_price: Option<Decimal>,
    pub status: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,
}

/// Validated input for booking creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub property_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: String,
    pub check_out: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
}
