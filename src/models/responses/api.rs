//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a payload and a human-readable message.
    pub fn success(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        }
    }

    /// Successful response carrying only a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Successful response carrying only a message.
    pub fn message(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// Error message
    #[schema(example = "User not found")]
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_carries_message_and_data() {
        let json = serde_json::to_value(ApiResponse::success("User created successfully", 7))
            .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User created successfully");
        assert_eq!(json["data"], 7);
    }

    #[test]
    fn test_data_envelope_omits_message() {
        let json = serde_json::to_value(ApiResponse::data(vec![1, 2, 3])).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("message").is_none());
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_message_envelope_omits_data() {
        let json =
            serde_json::to_value(ApiResponse::<()>::message("User deleted successfully")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_empty_list_serializes_as_empty_array() {
        let json = serde_json::to_value(ApiResponse::data(Vec::<i32>::new())).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn test_error_envelope_uses_error_key() {
        let json = serde_json::to_value(ErrorResponse {
            success: false,
            error: "User not found".to_string(),
        })
        .unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "User not found");
    }
}
