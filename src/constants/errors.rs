//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID";

// Request errors
pub const ERR_INVALID_REQUEST_BODY: &str = "Invalid request body";
