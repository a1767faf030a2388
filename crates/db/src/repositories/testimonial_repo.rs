//! Repository for the `testimonials` table.

use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str = "id, public_id, name, location, text, rating, tour_name, \
                       image_url, image_public_id, active, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (public_id, name, location, text, rating, tour_name, \
                                       image_url, image_public_id, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.public_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.text)
            .bind(input.rating)
            .bind(&input.tour_name)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: &str,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE public_id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE active = TRUE ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update_by_public_id(
        pool: &PgPool,
        public_id: &str,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                text = COALESCE($4, text),
                rating = COALESCE($5, rating),
                tour_name = COALESCE($6, tour_name),
                active = COALESCE($7, active),
                image_url = COALESCE($8, image_url),
                image_public_id = COALESCE($9, image_public_id),
                updated_at = NOW()
             WHERE public_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(public_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.text)
            .bind(input.rating)
            .bind(&input.tour_name)
            .bind(input.active)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_by_public_id(pool: &PgPool, public_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE public_id = $1")
            .bind(public_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
