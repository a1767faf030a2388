//! Handlers for tour packages: public reads plus the admin CRUD quintet.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wayfarer_core::error::CoreError;
use wayfarer_core::{features, ids};
use wayfarer_db::models::tour::{CreateTour, Tour, UpdateTour};
use wayfarer_db::repositories::TourRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormPayload;
use crate::handlers::{destroy_stored_image, upload_form_image};
use crate::middleware::auth::AdminSession;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Media host folder for tour images.
const MEDIA_FOLDER: &str = "tours";

#[derive(Debug, Serialize)]
pub struct TourList {
    pub tours: Vec<Tour>,
}

#[derive(Debug, Serialize)]
pub struct TourBody {
    pub tour: Tour,
}

#[derive(Debug, Serialize)]
pub struct TourCreated {
    pub message: &'static str,
    pub tour: Tour,
}

/// GET /api/tours
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<TourList>> {
    let tours = TourRepo::list_active(&state.pool).await?;
    Ok(Json(TourList { tours }))
}

/// GET /api/tours/{id}
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TourBody>> {
    let tour = TourRepo::find_by_public_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour" }))?;
    Ok(Json(TourBody { tour }))
}

/// GET /api/admin/tours
pub async fn list_admin(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<TourList>> {
    let tours = TourRepo::list_all(&state.pool).await?;
    Ok(Json(TourList { tours }))
}

/// POST /api/admin/tours (multipart)
pub async fn create(
    admin: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<TourCreated>)> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let input = CreateTour {
        public_id: ids::tour_id(),
        title: form.text("title"),
        description: form.raw_text("description"),
        price: form.text("price"),
        duration: form.text("duration"),
        features: form
            .text("features")
            .map(|raw| features::parse_features(&raw))
            .unwrap_or_default(),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
        active: form.flag("active").unwrap_or(false),
    };

    let tour = TourRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %tour.public_id, username = %admin.username, "Tour created");

    Ok((
        StatusCode::CREATED,
        Json(TourCreated {
            message: "Tour created successfully",
            tour,
        }),
    ))
}

/// PUT /api/admin/tours/{id} (multipart)
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let input = UpdateTour {
        title: form.text("title"),
        description: form.raw_text("description"),
        price: form.text("price"),
        duration: form.text("duration"),
        features: form
            .text("features")
            .map(|raw| features::parse_features(&raw)),
        active: form.flag("active"),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
    };

    TourRepo::update_by_public_id(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour" }))?;

    Ok(Json(MessageResponse {
        message: "Tour updated successfully",
    }))
}

/// Request body for the status toggle route.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub active: bool,
}

/// PUT /api/admin/tours/{id}/status (JSON)
///
/// Flips only the visibility flag, leaving every other field untouched.
pub async fn set_status(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<MessageResponse>> {
    TourRepo::set_active(&state.pool, &id, input.active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour" }))?;

    Ok(Json(MessageResponse {
        message: "Status updated",
    }))
}

/// DELETE /api/admin/tours/{id}
pub async fn delete(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let tour = TourRepo::find_by_public_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour" }))?;

    destroy_stored_image(
        &state,
        tour.image_url.as_deref(),
        tour.image_public_id.as_deref(),
        MEDIA_FOLDER,
    )
    .await?;

    TourRepo::delete_by_public_id(&state.pool, &id).await?;
    tracing::info!(id = %id, username = %admin.username, "Tour deleted");

    Ok(Json(MessageResponse {
        message: "Tour deleted successfully",
    }))
}
