//! Handlers for contact form submissions.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use wayfarer_core::error::CoreError;
use wayfarer_core::ids;
use wayfarer_db::models::contact::{Contact, CreateContact};
use wayfarer_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::middleware::auth::AdminSession;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for the public contact form.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
}

/// POST /api/contact (public)
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<Json<MessageResponse>> {
    input
        .validate()
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid email address".into())))?;

    let (Some(name), Some(email)) = (non_blank(input.name), non_blank(input.email)) else {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required fields".into(),
        )));
    };

    ContactRepo::create(
        &state.pool,
        &CreateContact {
            public_id: ids::contact_id(),
            name,
            email,
            phone: non_blank(input.phone),
            message: input.message.filter(|m| !m.is_empty()),
        },
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Message sent successfully!",
    }))
}

/// GET /api/admin/contacts
pub async fn list_admin(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<ContactList>> {
    let contacts = ContactRepo::list_all(&state.pool).await?;
    Ok(Json(ContactList { contacts }))
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ContactRepo::delete_by_public_id(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Contact" }));
    }

    tracing::info!(id = %id, username = %admin.username, "Contact deleted");

    Ok(Json(MessageResponse {
        message: "Contact deleted successfully",
    }))
}
