//! User service for user CRUD operations.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Create a new UserService with a shared repository (for dependency injection).
    #[allow(dead_code)]
    pub fn with_repository(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        info!("Creating user with email: {}", req.email);

        // Timestamps are placeholders here; the repository stamps the real
        // values at insertion and writes them back.
        let now = Utc::now();
        let mut user = User {
            id: 0,
            name: req.name,
            email: req.email,
            phone: req.phone,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(&mut user).await?;

        info!("Successfully created user: {}", user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: i32) -> Result<User, ApiError> {
        debug!("Fetching user by id: {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        debug!("Fetching all users");
        self.repository.find_all().await
    }

    /// Update a user, overwriting only the fields supplied in the request.
    ///
    /// This is a read-modify-write without any locking: two concurrent
    /// updates to the same id can interleave and one writer's fields can be
    /// lost. The database serializes the individual statements only.
    pub async fn update_user(&self, id: i32, req: UpdateUserRequest) -> Result<User, ApiError> {
        info!("Updating user: {}", id);

        let mut user = self.repository.find_by_id(id).await.inspect_err(|_| {
            warn!("Update failed: user not found with id: {}", id);
        })?;

        apply_updates(&mut user, req);
        self.repository.update(id, &mut user).await?;

        info!("Successfully updated user: {}", id);
        Ok(user)
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), ApiError> {
        info!("Deleting user: {}", id);
        self.repository.delete(id).await
    }
}

/// Overwrite the stored fields with the non-empty fields of the request.
///
/// An omitted field and an empty string both mean "not supplied", so a
/// field cannot be cleared to empty through an update.
fn apply_updates(user: &mut User, req: UpdateUserRequest) {
    if let Some(name) = req.name.filter(|v| !v.is_empty()) {
        user.name = name;
    }
    if let Some(email) = req.email.filter(|v| !v.is_empty()) {
        user.email = email;
    }
    if let Some(phone) = req.phone.filter(|v| !v.is_empty()) {
        user.phone = phone;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_updates_overwrites_supplied_fields_only() {
        let mut user = sample_user();
        let created_at = user.created_at;

        apply_updates(
            &mut user,
            UpdateUserRequest {
                name: Some("B".to_string()),
                email: None,
                phone: None,
            },
        );

        assert_eq!(user.name, "B");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.phone, "1");
        assert_eq!(user.created_at, created_at);
    }

    #[test]
    fn test_apply_updates_treats_empty_string_as_absent() {
        let mut user = sample_user();

        apply_updates(
            &mut user,
            UpdateUserRequest {
                name: Some(String::new()),
                email: Some(String::new()),
                phone: Some("2".to_string()),
            },
        );

        assert_eq!(user.name, "A");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.phone, "2");
    }

    #[test]
    fn test_apply_updates_with_all_fields() {
        let mut user = sample_user();

        apply_updates(
            &mut user,
            UpdateUserRequest {
                name: Some("B".to_string()),
                email: Some("b@x.com".to_string()),
                phone: Some("2".to_string()),
            },
        );

        assert_eq!(user.name, "B");
        assert_eq!(user.email, "b@x.com");
        assert_eq!(user.phone, "2");
    }

    #[test]
    fn test_apply_updates_with_no_fields_is_a_noop() {
        let mut user = sample_user();

        apply_updates(
            &mut user,
            UpdateUserRequest {
                name: None,
                email: None,
                phone: None,
            },
        );

        assert_eq!(user.name, "A");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.phone, "1");
    }
}
