//! Repository for the `gallery_items` table.

use sqlx::PgPool;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};

const COLUMNS: &str = "id, public_id, title, category, image_url, image_public_id, \
                       active, created_at, updated_at";

/// Provides CRUD operations for gallery items.
pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items (public_id, title, category, image_url, \
                                        image_public_id, active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.public_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: &str,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE public_id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    /// List publicly visible items, newest first, bounded by `limit`.
    pub async fn list_active(pool: &PgPool, limit: i64) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_items WHERE active = TRUE
             ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, GalleryItem>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update_by_public_id(
        pool: &PgPool,
        public_id: &str,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_items SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                active = COALESCE($4, active),
                image_url = COALESCE($5, image_url),
                image_public_id = COALESCE($6, image_public_id),
                updated_at = NOW()
             WHERE public_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(public_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.active)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_by_public_id(pool: &PgPool, public_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE public_id = $1")
            .bind(public_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
