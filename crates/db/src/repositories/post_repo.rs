//! Repository for the `posts` table.

use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost};

const COLUMNS: &str = "id, public_id, slug, title, content, author, \
                       image_url, image_public_id, active, created_at, updated_at";

/// Upper bound on slug-collision retries before giving up.
const MAX_SLUG_ATTEMPTS: u32 = 20;

/// Provides CRUD operations for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, retrying with `-2`, `-3`, ... suffixes when the
    /// derived slug is already taken.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = if attempt == 1 {
                input.slug.clone()
            } else {
                format!("{}-{attempt}", input.slug)
            };

            match Self::insert(pool, input, &slug).await {
                Err(sqlx::Error::Database(db_err))
                    if db_err.code().as_deref() == Some("23505")
                        && db_err.constraint() == Some("uq_posts_slug") =>
                {
                    continue;
                }
                other => return other,
            }
        }

        // Exhausting the retry budget means something is generating
        // identical titles in a tight loop; surface it as a conflict.
        Err(sqlx::Error::Protocol(format!(
            "could not find a free slug for '{}' after {MAX_SLUG_ATTEMPTS} attempts",
            input.slug
        )))
    }

    async fn insert(pool: &PgPool, input: &CreatePost, slug: &str) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (public_id, slug, title, content, author, \
                                image_url, image_public_id, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.public_id)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: &str,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE public_id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    /// Public single-post lookup: by slug, visible posts only.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE slug = $1 AND active = TRUE");
        sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM posts WHERE active = TRUE ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    pub async fn update_by_public_id(
        pool: &PgPool,
        public_id: &str,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                author = COALESCE($4, author),
                active = COALESCE($5, active),
                image_url = COALESCE($6, image_url),
                image_public_id = COALESCE($7, image_public_id),
                updated_at = NOW()
             WHERE public_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(public_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .bind(input.active)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_by_public_id(pool: &PgPool, public_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE public_id = $1")
            .bind(public_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
