//! HTTP handlers for user CRUD endpoints.

pub mod request_utils;
pub mod response;

use hyper::{body::Bytes, Response};
use user_store_core::{Lookup, User};

use crate::router::{AppState, RouterError};
use request_utils::{build_empty_response, build_response, parse_json_body};

pub use response::{error_response, ApiError, ErrorResponse};

fn to_json<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, RouterError> {
    serde_json::to_vec(value)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))
}

/// Lists all users in insertion order.
///
/// # Endpoint
/// `GET /users`
///
/// # Response
/// - **200 OK**: JSON array of users
/// ```json
/// [{"id": 1, "name": "Shivam", "email": "shivam@gmail.com"}]
/// ```
pub fn list_users(state: &AppState) -> Result<Response<Bytes>, RouterError> {
    let users = state.store.list_all()?;
    build_response(200, to_json(&users)?)
}

/// Reads one user by id.
///
/// # Endpoint
/// `GET /users/{id}`
///
/// # Response
/// - **200 OK**: The first user with that id
///
/// # Errors
/// - **400 Bad Request**: Id is not an integer
/// - **404 Not Found**: No user has that id
///
/// # Example
/// ```bash
/// curl http://localhost:8080/users/1
/// ```
pub fn get_user(state: &AppState, id: i64) -> Result<Response<Bytes>, RouterError> {
    match state.store.get(id)? {
        Lookup::Found(user) => build_response(200, to_json(&user)?),
        Lookup::NotFound => Err(RouterError::NotFound(format!("User with id {} not found", id))),
    }
}

/// Appends a user. Duplicate ids are accepted.
///
/// # Endpoint
/// `POST /users`
///
/// # Request Body
/// ```json
/// {"id": 4, "name": "X", "email": "x@e.com"}
/// ```
///
/// # Response
/// - **200 OK**: Empty body
///
/// # Errors
/// - **400 Bad Request**: Malformed JSON or missing field
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"id": 4, "name": "X", "email": "x@e.com"}'
/// ```
pub fn create_user(state: &AppState, body: &[u8]) -> Result<Response<Bytes>, RouterError> {
    let user: User = parse_json_body(body)?;
    tracing::info!("Creating user {}", user.id);
    state.store.add(user)?;
    build_empty_response(200)
}

/// Replaces the user whose id matches the body's id.
///
/// # Endpoint
/// `PUT /users`
///
/// # Response
/// - **200 OK**: Empty body
///
/// # Errors
/// - **400 Bad Request**: Malformed JSON or missing field
/// - **404 Not Found**: No user has that id; nothing is written
pub fn replace_user(state: &AppState, body: &[u8]) -> Result<Response<Bytes>, RouterError> {
    let user: User = parse_json_body(body)?;
    tracing::info!("Replacing user {}", user.id);
    state.store.update(user)?;
    build_empty_response(200)
}

/// Deletes every user with the given id. Absent ids are a no-op.
///
/// # Endpoint
/// `DELETE /users/{id}`
///
/// # Response
/// - **200 OK**: Empty body
pub fn delete_user(state: &AppState, id: i64) -> Result<Response<Bytes>, RouterError> {
    let removed = state.store.delete(id)?;
    tracing::info!("Deleted {} user(s) with id {}", removed, id);
    build_empty_response(200)
}
