//! Repository for the `bookings` table.

use sqlx::PgPool;
use wayfarer_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking};

const COLUMNS: &str = "id, public_id, name, email, phone, tour_type, dates, guests, \
                       message, status, created_at, updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking. Status starts at `pending`.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (public_id, name, email, phone, tour_type, dates, guests, message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.public_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.tour_type)
            .bind(&input.dates)
            .bind(&input.guests)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by internal id (used by the outbox worker).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE public_id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// Update only the lifecycle status (and the update timestamp).
    pub async fn set_status(
        pool: &PgPool,
        public_id: &str,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE public_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(public_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
