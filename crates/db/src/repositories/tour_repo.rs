//! Repository for the `tours` table.

use sqlx::PgPool;

use crate::models::tour::{CreateTour, Tour, UpdateTour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, public_id, title, description, price, duration, features, \
                       image_url, image_public_id, active, created_at, updated_at";

/// Provides CRUD operations for tour packages.
pub struct TourRepo;

impl TourRepo {
    /// Insert a new tour, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTour) -> Result<Tour, sqlx::Error> {
        let query = format!(
            "INSERT INTO tours (public_id, title, description, price, duration, features, \
                                image_url, image_public_id, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(&input.public_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.price)
            .bind(&input.duration)
            .bind(&input.features)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a tour by its public id.
    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: &str,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tours WHERE public_id = $1");
        sqlx::query_as::<_, Tour>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    /// List publicly visible tours, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Tour>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tours WHERE active = TRUE ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Tour>(&query).fetch_all(pool).await
    }

    /// List all tours regardless of visibility, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tours ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Tour>(&query).fetch_all(pool).await
    }

    /// Update a tour. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given public id exists.
    pub async fn update_by_public_id(
        pool: &PgPool,
        public_id: &str,
        input: &UpdateTour,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE tours SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                duration = COALESCE($5, duration),
                features = COALESCE($6, features),
                active = COALESCE($7, active),
                image_url = COALESCE($8, image_url),
                image_public_id = COALESCE($9, image_public_id),
                updated_at = NOW()
             WHERE public_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(public_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.price)
            .bind(&input.duration)
            .bind(&input.features)
            .bind(input.active)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .fetch_optional(pool)
            .await
    }

    /// Toggle only the `active` flag (and the update timestamp).
    pub async fn set_active(
        pool: &PgPool,
        public_id: &str,
        active: bool,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE tours SET active = $2, updated_at = NOW()
             WHERE public_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(public_id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tour by public id. Returns `true` if a row was removed.
    pub async fn delete_by_public_id(pool: &PgPool, public_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tours WHERE public_id = $1")
            .bind(public_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
