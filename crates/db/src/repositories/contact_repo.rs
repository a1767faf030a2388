//! Repository for the `contacts` table.

use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};

const COLUMNS: &str = "id, public_id, name, email, phone, message, created_at";

/// Provides operations for contact form submissions.
pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (public_id, name, email, phone, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.public_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    pub async fn delete_by_public_id(pool: &PgPool, public_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE public_id = $1")
            .bind(public_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
