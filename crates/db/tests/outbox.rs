//! Outbox repository tests: enqueue, due selection, backoff, terminal failure.

use sqlx::PgPool;
use wayfarer_db::models::booking::CreateBooking;
use wayfarer_db::models::outbox::{CHANNEL_EMAIL, CHANNEL_SMS, STATUS_FAILED, STATUS_PENDING};
use wayfarer_db::repositories::{BookingRepo, OutboxRepo};

async fn booking_id(pool: &PgPool) -> i64 {
    let booking = BookingRepo::create(
        pool,
        &CreateBooking {
            public_id: "BK1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+911234567890".to_string(),
            tour_type: "Gulmarg Snow Adventure".to_string(),
            dates: "Not specified".to_string(),
            guests: "1".to_string(),
            message: String::new(),
        },
    )
    .await
    .expect("create booking");
    booking.id
}

#[sqlx::test(migrations = "../../migrations")]
async fn enqueued_intents_are_immediately_due(pool: PgPool) {
    let booking = booking_id(&pool).await;
    OutboxRepo::enqueue(&pool, booking, CHANNEL_EMAIL)
        .await
        .expect("enqueue");
    OutboxRepo::enqueue(&pool, booking, CHANNEL_SMS)
        .await
        .expect("enqueue");

    let due = OutboxRepo::list_due(&pool, 10).await.expect("list");
    assert_eq!(due.len(), 2);
    assert!(due.iter().all(|i| i.status == STATUS_PENDING && i.attempts == 0));
}

#[sqlx::test(migrations = "../../migrations")]
async fn sent_intents_leave_the_due_queue(pool: PgPool) {
    let booking = booking_id(&pool).await;
    let intent = OutboxRepo::enqueue(&pool, booking, CHANNEL_EMAIL)
        .await
        .expect("enqueue");

    let sent = OutboxRepo::mark_sent(&pool, intent.id, "smtp")
        .await
        .expect("query")
        .expect("row");
    assert_eq!(sent.provider.as_deref(), Some("smtp"));
    assert!(sent.sent_at.is_some());

    assert!(OutboxRepo::list_due(&pool, 10).await.expect("list").is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn failed_attempt_backs_off_and_stays_pending(pool: PgPool) {
    let booking = booking_id(&pool).await;
    let intent = OutboxRepo::enqueue(&pool, booking, CHANNEL_SMS)
        .await
        .expect("enqueue");

    let failed = OutboxRepo::mark_failed(&pool, intent.id, "provider 503", 5, 60.0)
        .await
        .expect("query")
        .expect("row");

    assert_eq!(failed.status, STATUS_PENDING);
    assert_eq!(failed.attempts, 1);
    assert_eq!(failed.last_error.as_deref(), Some("provider 503"));
    // Rescheduled into the future, so no longer due.
    assert!(failed.next_attempt_at > failed.updated_at);
    assert!(OutboxRepo::list_due(&pool, 10).await.expect("list").is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn attempt_cap_marks_intent_terminally_failed(pool: PgPool) {
    let booking = booking_id(&pool).await;
    let intent = OutboxRepo::enqueue(&pool, booking, CHANNEL_EMAIL)
        .await
        .expect("enqueue");

    let mut last = intent;
    for _ in 0..5 {
        last = OutboxRepo::mark_failed(&pool, last.id, "smtp timeout", 5, 0.0)
            .await
            .expect("query")
            .expect("row");
    }

    assert_eq!(last.status, STATUS_FAILED);
    assert_eq!(last.attempts, 5);
    assert!(OutboxRepo::list_due(&pool, 10).await.expect("list").is_empty());
}
