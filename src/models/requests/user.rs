//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for creating a user
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// User's full name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's phone number
    #[schema(example = "+1234567890")]
    pub phone: String,
}

/// Request payload for updating a user.
///
/// All fields are optional. An omitted field and an empty string both leave
/// the stored value unchanged, so a field cannot be cleared to empty through
/// this endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address
    #[schema(example = "newemail@example.com")]
    pub email: Option<String>,
    /// New phone number
    #[schema(example = "+1987654321")]
    pub phone: Option<String>,
}
