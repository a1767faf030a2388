//! Tour package model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

/// Full tour row from the `tours` table.
///
/// Serializes with the `public_id` exposed as `id`; the storage key and the
/// media deletion handle never leave the process.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub features: Vec<String>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub image_public_id: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new tour.
#[derive(Debug)]
pub struct CreateTour {
    pub public_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
    pub active: bool,
}

/// DTO for updating a tour. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateTour {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub active: Option<bool>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
}
