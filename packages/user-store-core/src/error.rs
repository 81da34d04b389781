//! Store error types.

use thiserror::Error;

/// Record store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested identifier
    #[error("User with id {id} not found")]
    UserNotFound { id: i64 },

    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,
}
