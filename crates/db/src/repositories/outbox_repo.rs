//! Repository for the `notification_outbox` table.

use sqlx::PgPool;
use wayfarer_core::types::DbId;

use crate::models::outbox::OutboxIntent;

const COLUMNS: &str = "id, booking_id, channel, status, provider, attempts, \
                       next_attempt_at, last_error, sent_at, created_at, updated_at";

/// Provides operations for queued booking notifications.
pub struct OutboxRepo;

impl OutboxRepo {
    /// Queue a delivery intent for a booking on the given channel.
    pub async fn enqueue(
        pool: &PgPool,
        booking_id: DbId,
        channel: &str,
    ) -> Result<OutboxIntent, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_outbox (booking_id, channel)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutboxIntent>(&query)
            .bind(booking_id)
            .bind(channel)
            .fetch_one(pool)
            .await
    }

    /// Pending intents whose next attempt is due, oldest first.
    pub async fn list_due(pool: &PgPool, limit: i64) -> Result<Vec<OutboxIntent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notification_outbox
             WHERE status = 'pending' AND next_attempt_at <= NOW()
             ORDER BY id
             LIMIT $1"
        );
        sqlx::query_as::<_, OutboxIntent>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All intents for a booking, oldest first.
    pub async fn list_for_booking(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Vec<OutboxIntent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notification_outbox WHERE booking_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, OutboxIntent>(&query)
            .bind(booking_id)
            .fetch_all(pool)
            .await
    }

    /// Mark an intent delivered by the named provider.
    pub async fn mark_sent(
        pool: &PgPool,
        id: DbId,
        provider: &str,
    ) -> Result<Option<OutboxIntent>, sqlx::Error> {
        let query = format!(
            "UPDATE notification_outbox SET
                status = 'sent',
                provider = $2,
                attempts = attempts + 1,
                sent_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutboxIntent>(&query)
            .bind(id)
            .bind(provider)
            .fetch_optional(pool)
            .await
    }

    /// Record a failed attempt.
    ///
    /// The intent stays `pending` with its next attempt pushed out by
    /// `base_backoff_secs * 2^attempts`; once the attempt count reaches
    /// `max_attempts` it flips to terminal `failed`.
    pub async fn mark_failed(
        pool: &PgPool,
        id: DbId,
        error: &str,
        max_attempts: i32,
        base_backoff_secs: f64,
    ) -> Result<Option<OutboxIntent>, sqlx::Error> {
        let query = format!(
            "UPDATE notification_outbox SET
                attempts = attempts + 1,
                last_error = $2,
                status = CASE WHEN attempts + 1 >= $3 THEN 'failed' ELSE 'pending' END,
                next_attempt_at = NOW() + INTERVAL '1 second' * ($4 * POWER(2, attempts)),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutboxIntent>(&query)
            .bind(id)
            .bind(error)
            .bind(max_attempts)
            .bind(base_backoff_secs)
            .fetch_optional(pool)
            .await
    }
}
