//! Matchit routing configuration.

use std::sync::Arc;

use hyper::{body::Bytes, Method, Request, Response};
use matchit::Router as MatchitRouter;
use thiserror::Error;

use crate::handlers::{self, request_utils};
use user_store_core::{config::ServerConfig, error::StoreError, UserStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// User record store
    pub store: Arc<UserStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

/// Path patterns known to the router.
#[derive(Debug, Clone, Copy)]
enum Route {
    Users,
    User,
}

/// A resolved request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /users`
    ListUsers,
    /// `GET /users/{id}`
    GetUser(i64),
    /// `POST /users`
    CreateUser,
    /// `PUT /users`
    ReplaceUser,
    /// `DELETE /users/{id}`
    DeleteUser(i64),
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<Route>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the user routes installed.
    pub fn new(store: Arc<UserStore>, config: Arc<ServerConfig>) -> Result<Self, RouterError> {
        let mut router = MatchitRouter::new();

        for (path, route) in [("/users", Route::Users), ("/users/{id}", Route::User)] {
            router.insert(path, route).map_err(|e| {
                RouterError::InternalError(format!("Failed to insert {} route: {}", path, e))
            })?;
        }

        Ok(Self {
            inner: router,
            state: AppState { store, config },
        })
    }

    /// Resolves a method and path to an endpoint.
    ///
    /// Unknown paths yield `NotFound`, known paths with an unsupported
    /// method yield `MethodNotAllowed`, and a non-integer id yields
    /// `BadRequest`.
    pub fn resolve(&self, method: &Method, path: &str) -> Result<Endpoint, RouterError> {
        let matched = self
            .inner
            .at(path)
            .map_err(|_| RouterError::NotFound(format!("No route found for {}", path)))?;

        match *matched.value {
            Route::Users => match *method {
                Method::GET => Ok(Endpoint::ListUsers),
                Method::POST => Ok(Endpoint::CreateUser),
                Method::PUT => Ok(Endpoint::ReplaceUser),
                _ => Err(RouterError::MethodNotAllowed),
            },
            Route::User => {
                if *method != Method::GET && *method != Method::DELETE {
                    return Err(RouterError::MethodNotAllowed);
                }
                let id = request_utils::parse_id(matched.params.get("id"))?;
                if *method == Method::GET {
                    Ok(Endpoint::GetUser(id))
                } else {
                    Ok(Endpoint::DeleteUser(id))
                }
            }
        }
    }

    /// Runs a request whose body has already been read.
    ///
    /// Errors are rendered into their HTTP error responses.
    pub fn dispatch(&self, method: &Method, path: &str, body: Bytes) -> Response<Bytes> {
        self.handle(method, path, &body).unwrap_or_else(|err| {
            if let RouterError::InternalError(msg) = &err {
                tracing::error!("{} {} failed: {}", method, path, msg);
            }
            err.into()
        })
    }

    fn handle(
        &self,
        method: &Method,
        path: &str,
        body: &[u8],
    ) -> Result<Response<Bytes>, RouterError> {
        match self.resolve(method, path)? {
            Endpoint::ListUsers => handlers::list_users(&self.state),
            Endpoint::GetUser(id) => handlers::get_user(&self.state, id),
            Endpoint::CreateUser => handlers::create_user(&self.state, body),
            Endpoint::ReplaceUser => handlers::replace_user(&self.state, body),
            Endpoint::DeleteUser(id) => handlers::delete_user(&self.state, id),
        }
    }

    /// Routes an incoming request to the appropriate handler.
    pub async fn route(&self, req: Request<hyper::body::Incoming>) -> Response<Bytes> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let timeout_ms = self.state.config.request_timeout_ms;
        match request_utils::read_request_body_with_timeout(req, timeout_ms).await {
            Ok(body) => self.dispatch(&method, &path, body),
            Err(err) => {
                tracing::warn!("{} {}: {}", method, path, err);
                err.into()
            }
        }
    }
}

/// Router error type.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Error: {0}")]
    InternalError(String),
    #[error("Request Timeout")]
    Timeout,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
}

impl RouterError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            RouterError::MethodNotAllowed => 405,
            RouterError::InternalError(_) => 500,
            RouterError::Timeout => 408,
            RouterError::BadRequest(_) => 400,
            RouterError::NotFound(_) => 404,
        }
    }
}

impl From<StoreError> for RouterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound { .. } => RouterError::NotFound(err.to_string()),
            StoreError::LockPoisoned => RouterError::InternalError(err.to_string()),
        }
    }
}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let status = err.status();
        let message = match &err {
            RouterError::MethodNotAllowed => "Method Not Allowed",
            // Internal details stay in the logs.
            RouterError::InternalError(_) => "Internal Server Error",
            RouterError::Timeout => "Request Timeout",
            RouterError::BadRequest(msg) => msg.as_str(),
            RouterError::NotFound(msg) => msg.as_str(),
        };

        let error_response = handlers::error_response(status, message.to_string(), None);
        let body = serde_json::to_vec(&error_response).unwrap_or_else(|e| {
            format!(
                "{{\"success\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\"}}}}",
                e
            )
            .into_bytes()
        });

        let mut response = Response::new(Bytes::from(body));
        *response.status_mut() =
            hyper::StatusCode::from_u16(status).unwrap_or(hyper::StatusCode::INTERNAL_SERVER_ERROR);
        response.headers_mut().insert(
            hyper::header::CONTENT_TYPE,
            hyper::header::HeaderValue::from_static("application/json"),
        );
        response
    }
}
