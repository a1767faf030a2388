//! Notification outbox intent model.

use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

pub const CHANNEL_EMAIL: &str = "email";
pub const CHANNEL_SMS: &str = "sms";

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_SENT: &str = "sent";
pub const STATUS_FAILED: &str = "failed";

/// One queued notification delivery for a booking.
#[derive(Debug, Clone, FromRow)]
pub struct OutboxIntent {
    pub id: DbId,
    pub booking_id: DbId,
    pub channel: String,
    pub status: String,
    pub provider: Option<String>,
    pub attempts: i32,
    pub next_attempt_at: Timestamp,
    pub last_error: Option<String>,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
