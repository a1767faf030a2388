//! Notification outbox worker.
//!
//! Polls the `notification_outbox` table for due pending intents and hands
//! each to the matching channel dispatcher. Failed attempts are rescheduled
//! with exponential backoff until the attempt cap, after which the intent is
//! marked terminally failed. The worker runs until cancelled.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wayfarer_db::repositories::{BookingRepo, OutboxRepo};
use wayfarer_db::DbPool;

use crate::notifications::BookingNotifier;

/// How often the worker polls for due intents.
const POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Maximum intents processed per poll.
const BATCH_SIZE: i64 = 20;

/// Attempts before an intent is marked terminally failed.
pub const MAX_ATTEMPTS: i32 = 5;

/// First retry delay; doubles on every subsequent failure.
pub const BASE_BACKOFF_SECS: f64 = 60.0;

/// Run the outbox delivery loop until `cancel` is triggered.
pub async fn run(pool: DbPool, notifiers: Vec<Arc<dyn BookingNotifier>>, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = POLL_INTERVAL.as_secs(),
        channels = notifiers.len(),
        "Notification outbox worker started"
    );

    let mut interval = tokio::time::interval(POLL_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Notification outbox worker stopping");
                break;
            }
            _ = interval.tick() => {
                match drain(&pool, &notifiers).await {
                    Ok(processed) => {
                        if processed > 0 {
                            tracing::debug!(processed, "Outbox poll complete");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Outbox poll failed");
                    }
                }
            }
        }
    }
}

/// Process one batch of due intents. Returns how many were attempted.
pub async fn drain(
    pool: &DbPool,
    notifiers: &[Arc<dyn BookingNotifier>],
) -> Result<usize, sqlx::Error> {
    let due = OutboxRepo::list_due(pool, BATCH_SIZE).await?;

    for intent in &due {
        let Some(booking) = BookingRepo::find_by_id(pool, intent.booking_id).await? else {
            // The FK cascades on booking deletion, so this is a race at
            // worst; retire the intent rather than retry forever.
            OutboxRepo::mark_failed(pool, intent.id, "booking no longer exists", 1, 0.0).await?;
            continue;
        };

        let Some(notifier) = notifiers.iter().find(|n| n.channel() == intent.channel) else {
            OutboxRepo::mark_failed(pool, intent.id, "no dispatcher for channel", 1, 0.0).await?;
            continue;
        };

        let result = notifier.deliver(&booking).await;

        if result.success {
            OutboxRepo::mark_sent(pool, intent.id, result.provider).await?;
            tracing::info!(
                intent_id = intent.id,
                booking_id = %booking.public_id,
                channel = %intent.channel,
                provider = result.provider,
                "Notification delivered"
            );
        } else {
            let error = result.error.as_deref().unwrap_or("delivery failed");
            let updated =
                OutboxRepo::mark_failed(pool, intent.id, error, MAX_ATTEMPTS, BASE_BACKOFF_SECS)
                    .await?;
            tracing::warn!(
                intent_id = intent.id,
                booking_id = %booking.public_id,
                channel = %intent.channel,
                attempts = updated.as_ref().map(|i| i.attempts).unwrap_or_default(),
                error,
                "Notification delivery failed"
            );
        }
    }

    Ok(due.len())
}
