use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// User row persisted in the `users` table.
///
/// A user read from storage always carries a non-zero id and both
/// timestamps; `created_at` is set once at insertion and `updated_at`
/// is refreshed on every successful update.
#[derive(Debug, Serialize, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
