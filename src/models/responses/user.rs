//! User-related response models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct UserResponse {
    /// Database-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User's full name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's phone number
    #[schema(example = "+1234567890")]
    pub phone: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_user_response_preserves_all_fields() {
        let now = Utc::now();
        let user = User {
            id: 42,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
            created_at: now,
            updated_at: now,
        };

        let response = UserResponse::from(user);
        assert_eq!(response.id, 42);
        assert_eq!(response.name, "A");
        assert_eq!(response.email, "a@x.com");
        assert_eq!(response.phone, "1");
        assert_eq!(response.created_at, now);
        assert_eq!(response.updated_at, now);
    }
}
