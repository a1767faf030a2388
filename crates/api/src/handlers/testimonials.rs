//! Handlers for customer testimonials.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use wayfarer_core::error::CoreError;
use wayfarer_core::ids;
use wayfarer_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use wayfarer_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormPayload;
use crate::handlers::{destroy_stored_image, upload_form_image};
use crate::middleware::auth::AdminSession;
use crate::response::MessageResponse;
use crate::state::AppState;

const MEDIA_FOLDER: &str = "testimonials";

#[derive(Debug, Serialize)]
pub struct TestimonialList {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Serialize)]
pub struct TestimonialCreated {
    pub message: &'static str,
    pub testimonial: Testimonial,
}

/// Ratings come in as form text; anything that is not an integer between
/// 1 and 5 is a validation error.
fn parse_rating(form: &FormPayload) -> Result<Option<i32>, AppError> {
    let Some(raw) = form.text("rating") else {
        return Ok(None);
    };
    raw.parse::<i32>()
        .ok()
        .filter(|r| (1..=5).contains(r))
        .map(Some)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Rating must be an integer between 1 and 5".into(),
            ))
        })
}

/// GET /api/testimonials
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<TestimonialList>> {
    let testimonials = TestimonialRepo::list_active(&state.pool).await?;
    Ok(Json(TestimonialList { testimonials }))
}

/// GET /api/admin/testimonials
pub async fn list_admin(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<TestimonialList>> {
    let testimonials = TestimonialRepo::list_all(&state.pool).await?;
    Ok(Json(TestimonialList { testimonials }))
}

/// POST /api/admin/testimonials (multipart)
pub async fn create(
    admin: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<TestimonialCreated>)> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let rating = parse_rating(&form)?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let input = CreateTestimonial {
        public_id: ids::testimonial_id(),
        name: form.text("name"),
        location: form.text("location"),
        text: form.raw_text("text"),
        rating,
        tour_name: form.text("tour"),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
        active: form.flag("active").unwrap_or(false),
    };

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %testimonial.public_id, username = %admin.username, "Testimonial created");

    Ok((
        StatusCode::CREATED,
        Json(TestimonialCreated {
            message: "Testimonial created successfully",
            testimonial,
        }),
    ))
}

/// PUT /api/admin/testimonials/{id} (multipart)
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let rating = parse_rating(&form)?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let input = UpdateTestimonial {
        name: form.text("name"),
        location: form.text("location"),
        text: form.raw_text("text"),
        rating,
        tour_name: form.text("tour"),
        active: form.flag("active"),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
    };

    TestimonialRepo::update_by_public_id(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
        }))?;

    Ok(Json(MessageResponse {
        message: "Testimonial updated successfully",
    }))
}

/// DELETE /api/admin/testimonials/{id}
pub async fn delete(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let testimonial = TestimonialRepo::find_by_public_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
        }))?;

    destroy_stored_image(
        &state,
        testimonial.image_url.as_deref(),
        testimonial.image_public_id.as_deref(),
        MEDIA_FOLDER,
    )
    .await?;

    TestimonialRepo::delete_by_public_id(&state.pool, &id).await?;
    tracing::info!(id = %id, username = %admin.username, "Testimonial deleted");

    Ok(Json(MessageResponse {
        message: "Testimonial deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_in_range_parses() {
        let form = FormPayload::from_parts(&[("rating", "4")], None);
        assert_eq!(parse_rating(&form).unwrap(), Some(4));
    }

    #[test]
    fn missing_rating_is_none() {
        let form = FormPayload::from_parts(&[], None);
        assert_eq!(parse_rating(&form).unwrap(), None);
    }

    #[test]
    fn out_of_range_or_garbage_rating_is_rejected() {
        for bad in ["0", "6", "four", "4.5"] {
            let form = FormPayload::from_parts(&[("rating", bad)], None);
            assert!(parse_rating(&form).is_err(), "{bad} should be rejected");
        }
    }
}
