//! Booking model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

/// Full booking row from the `bookings` table.
///
/// `tour_type` is the customer's free-text tour label, not a reference to
/// the `tours` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tour_type: String,
    pub dates: String,
    pub guests: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateBooking {
    pub public_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tour_type: String,
    pub dates: String,
    pub guests: String,
    pub message: String,
}
