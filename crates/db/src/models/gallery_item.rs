//! Photo gallery item model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub image_public_id: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateGalleryItem {
    pub public_id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct UpdateGalleryItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
}
