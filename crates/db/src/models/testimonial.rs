//! Customer testimonial model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    /// Free-text label of the tour being reviewed, not a foreign key.
    #[serde(rename = "tour")]
    pub tour_name: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub image_public_id: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateTestimonial {
    pub public_id: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    pub tour_name: Option<String>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub location: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    pub tour_name: Option<String>,
    pub active: Option<bool>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
}
