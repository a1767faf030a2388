//! Shared type aliases for database-facing primitives.
//!
//! `DbId` is the internal numeric primary key; `Timestamp` is the UTC instant
//! used for all `created_at` / `updated_at` columns.

use chrono::{DateTime, Utc};

/// Internal database primary key.
pub type DbId = i64;

/// UTC timestamp used across persisted models.
pub type Timestamp = DateTime<Utc>;
