//! Handlers for bookings: the public submission form and admin management.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use wayfarer_core::booking::BookingStatus;
use wayfarer_core::error::CoreError;
use wayfarer_core::ids;
use wayfarer_core::types::DbId;
use wayfarer_db::models::booking::{Booking, CreateBooking};
use wayfarer_db::models::outbox::{CHANNEL_EMAIL, CHANNEL_SMS};
use wayfarer_db::repositories::{BookingRepo, OutboxRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::middleware::auth::AdminSession;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for the public booking form.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tour_type: Option<String>,
    pub dates: Option<String>,
    pub guests: Option<String>,
    pub message: Option<String>,
}

/// Queue state of one notification channel, reported back to the caller.
#[derive(Debug, Serialize)]
pub struct QueuedIntent {
    pub queued: bool,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QueuedNotifications {
    pub email: QueuedIntent,
    pub sms: QueuedIntent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceived {
    pub message: &'static str,
    pub booking_id: String,
    pub notifications: QueuedNotifications,
}

#[derive(Debug, Serialize)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}

/// POST /api/bookings (public)
///
/// Persists the booking, then queues one email and one sms intent for the
/// outbox worker. Queueing problems are logged and reported in the body;
/// they never fail the request -- the booking is already stored.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BookingRequest>,
) -> AppResult<Json<BookingReceived>> {
    input
        .validate()
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid email address".into())))?;

    let (Some(name), Some(email), Some(phone), Some(tour_type)) = (
        non_blank(input.name),
        non_blank(input.email),
        non_blank(input.phone),
        non_blank(input.tour_type),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required fields".into(),
        )));
    };

    let booking = BookingRepo::create(
        &state.pool,
        &CreateBooking {
            public_id: ids::booking_id(),
            name,
            email,
            phone,
            tour_type,
            dates: non_blank(input.dates).unwrap_or_else(|| "Not specified".to_string()),
            guests: non_blank(input.guests).unwrap_or_else(|| "1".to_string()),
            message: input.message.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(booking_id = %booking.public_id, tour = %booking.tour_type, "Booking received");

    let notifications = QueuedNotifications {
        email: enqueue_intent(&state, booking.id, CHANNEL_EMAIL).await,
        sms: enqueue_intent(&state, booking.id, CHANNEL_SMS).await,
    };

    Ok(Json(BookingReceived {
        message: "Booking received successfully! We will contact you shortly.",
        booking_id: booking.public_id,
        notifications,
    }))
}

async fn enqueue_intent(state: &AppState, booking_id: DbId, channel: &str) -> QueuedIntent {
    match OutboxRepo::enqueue(&state.pool, booking_id, channel).await {
        Ok(_) => QueuedIntent {
            queued: true,
            status: "pending",
        },
        Err(e) => {
            tracing::error!(booking_id, channel, error = %e, "Failed to queue notification");
            QueuedIntent {
                queued: false,
                status: "failed",
            }
        }
    }
}

/// GET /api/admin/bookings
pub async fn list_admin(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<BookingList>> {
    let bookings = BookingRepo::list_all(&state.pool).await?;
    Ok(Json(BookingList { bookings }))
}

/// Request body for the booking status update.
#[derive(Debug, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: String,
}

/// PUT /api/admin/bookings/{id} (JSON)
pub async fn set_status(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BookingStatusUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let status: BookingStatus = input
        .status
        .parse()
        .map_err(|e: String| AppError::Core(CoreError::Validation(e)))?;

    BookingRepo::set_status(&state.pool, &id, status.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Booking" }))?;

    Ok(Json(MessageResponse {
        message: "Booking updated successfully",
    }))
}
