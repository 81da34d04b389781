//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::{body::Bytes, Request, Response};
use serde::de::DeserializeOwned;
use tokio::time;

use crate::router::RouterError;

/// Helper function to read request body with timeout
pub async fn read_request_body_with_timeout(
    req: Request<hyper::body::Incoming>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError> {
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.into_body().collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Parses a user id path parameter.
pub fn parse_id(raw: Option<&str>) -> Result<i64, RouterError> {
    let raw = raw.ok_or_else(|| RouterError::BadRequest("Missing user id".to_string()))?;
    raw.parse()
        .map_err(|e| RouterError::BadRequest(format!("Invalid user id '{}': {}", raw, e)))
}

/// Parses a JSON request body.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, RouterError> {
    serde_json::from_slice(body)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Helper to build empty HTTP response
pub fn build_empty_response(status: u16) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .body(Bytes::new())
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_store_core::User;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("42")).unwrap(), 42);
        assert_eq!(parse_id(Some("-3")).unwrap(), -3);
        assert!(matches!(parse_id(Some("abc")), Err(RouterError::BadRequest(_))));
        assert!(matches!(parse_id(None), Err(RouterError::BadRequest(_))));
    }

    #[test]
    fn test_parse_json_body() {
        let user: User = parse_json_body(br#"{"id":1,"name":"a","email":"b"}"#).unwrap();
        assert_eq!(user, User::new(1, "a", "b"));

        let err = parse_json_body::<User>(b"{not json").unwrap_err();
        assert!(matches!(err, RouterError::BadRequest(_)));
    }

    #[test]
    fn test_build_empty_response() {
        let response = build_empty_response(200).unwrap();
        assert_eq!(response.status(), 200);
        assert!(response.body().is_empty());
    }
}
