//! In-memory user record store.
//!
//! Provides the user record type, the lock-guarded store that owns
//! the collection, store errors, and server configuration.

pub mod config;
pub mod error;
pub mod store;
pub mod user;

pub use store::{Lookup, UserStore};
pub use user::User;
