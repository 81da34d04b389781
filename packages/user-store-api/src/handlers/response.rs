//! Response types and helpers for HTTP endpoints.

use serde::Serialize;

/// Consistent API error response wrapper
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false for error responses
    pub success: bool,
    /// Error information
    pub error: ApiError,
}

/// Error information carried by [`ErrorResponse`]
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error code (HTTP status code as string)
    pub code: String,
    /// Error message
    pub message: String,
    /// Optional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Helper to create error response
pub fn error_response(code: u16, message: String, details: Option<String>) -> ErrorResponse {
    ErrorResponse {
        success: false,
        error: ApiError {
            code: code.to_string(),
            message,
            details,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_when_absent() {
        let value = serde_json::to_value(error_response(404, "Not Found".to_string(), None)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "error": {"code": "404", "message": "Not Found"}
            })
        );
    }
}
