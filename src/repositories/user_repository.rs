//! User repository for all PostgreSQL operations related to users.
//!
//! This repository encapsulates all database access logic for the `users`
//! table, providing a clean interface for the service layer. Every operation
//! is a single SQL statement; no transactions are opened here.

use chrono::Utc;
use log::debug;
use sqlx::PgPool;

use crate::constants::ERR_USER_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user row.
    ///
    /// Stamps `created_at` and `updated_at` with the current instant and
    /// writes the generated id (and both timestamps) back onto the input.
    pub async fn create(&self, user: &mut User) -> Result<(), ApiError> {
        let now = Utc::now();
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (name, email, phone, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        user.id = id;
        user.created_at = now;
        user.updated_at = now;
        Ok(())
    }

    /// Fetch a user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<User, ApiError> {
        debug!("Repository: finding user by id: {}", id);
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, phone, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }

    /// Fetch all users ordered by ascending id.
    ///
    /// Returns an empty vector when the table is empty.
    pub async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: fetching all users");
        Ok(sqlx::query_as::<_, User>(
            "SELECT id, name, email, phone, created_at, updated_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Overwrite the mutable fields of an existing user and refresh
    /// `updated_at`, which is written back onto the input.
    pub async fn update(&self, id: i32, user: &mut User) -> Result<(), ApiError> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE users SET name = $1, email = $2, phone = $3, updated_at = $4 WHERE id = $5",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }

        user.updated_at = now;
        Ok(())
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        debug!("Repository: deleting user: {}", id);
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
