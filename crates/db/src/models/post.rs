//! Blog post model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: String,
    pub slug: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: String,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub image_public_id: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreatePost {
    pub public_id: String,
    pub slug: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: String,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub active: Option<bool>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
}
