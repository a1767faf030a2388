//! Handlers for the photo gallery.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wayfarer_core::error::CoreError;
use wayfarer_core::ids;
use wayfarer_db::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use wayfarer_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormPayload;
use crate::handlers::{destroy_stored_image, upload_form_image};
use crate::middleware::auth::AdminSession;
use crate::response::MessageResponse;
use crate::state::AppState;

const MEDIA_FOLDER: &str = "gallery";

/// Default and ceiling for the public list's `limit` parameter.
const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

#[derive(Debug, Serialize)]
pub struct GalleryList {
    pub gallery: Vec<GalleryItem>,
}

#[derive(Debug, Serialize)]
pub struct GalleryItemCreated {
    pub message: &'static str,
    #[serde(rename = "galleryItem")]
    pub gallery_item: GalleryItem,
}

/// Query parameters for the public gallery listing.
#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    pub limit: Option<i64>,
}

/// GET /api/gallery?limit=N
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<Json<GalleryList>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let gallery = GalleryRepo::list_active(&state.pool, limit).await?;
    Ok(Json(GalleryList { gallery }))
}

/// GET /api/admin/gallery
pub async fn list_admin(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<GalleryList>> {
    let gallery = GalleryRepo::list_all(&state.pool).await?;
    Ok(Json(GalleryList { gallery }))
}

/// POST /api/admin/gallery (multipart)
pub async fn create(
    admin: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<GalleryItemCreated>)> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let input = CreateGalleryItem {
        public_id: ids::gallery_id(),
        title: form.text("title"),
        category: form.text("category"),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
        active: form.flag("active").unwrap_or(false),
    };

    let gallery_item = GalleryRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %gallery_item.public_id, username = %admin.username, "Gallery item created");

    Ok((
        StatusCode::CREATED,
        Json(GalleryItemCreated {
            message: "Gallery item created successfully",
            gallery_item,
        }),
    ))
}

/// PUT /api/admin/gallery/{id} (multipart)
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let input = UpdateGalleryItem {
        title: form.text("title"),
        category: form.text("category"),
        active: form.flag("active"),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
    };

    GalleryRepo::update_by_public_id(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gallery item",
        }))?;

    Ok(Json(MessageResponse {
        message: "Gallery item updated successfully",
    }))
}

/// DELETE /api/admin/gallery/{id}
pub async fn delete(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let item = GalleryRepo::find_by_public_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gallery item",
        }))?;

    destroy_stored_image(
        &state,
        item.image_url.as_deref(),
        item.image_public_id.as_deref(),
        MEDIA_FOLDER,
    )
    .await?;

    GalleryRepo::delete_by_public_id(&state.pool, &id).await?;
    tracing::info!(id = %id, username = %admin.username, "Gallery item deleted");

    Ok(Json(MessageResponse {
        message: "Gallery item deleted successfully",
    }))
}
