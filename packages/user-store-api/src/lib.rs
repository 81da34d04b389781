//! REST API server for the in-memory user store.
//!
//! Provides the route table, user CRUD handlers, error responses,
//! and the hyper connection loop.

pub mod handlers;
pub mod router;
pub mod server;

pub use router::{Endpoint, Router, RouterError};
pub use server::Server;
