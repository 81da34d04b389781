//! User record definition and seed data.

use serde::{Deserialize, Serialize};

/// A single user record.
///
/// No constraints are enforced on any field: empty names, negative
/// and duplicate identifiers are all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Record identifier, treated as a key by convention only
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl User {
    /// Creates a new user record.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Records the store holds at process start.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Shivam", "shivam@gmail.com"),
        User::new(2, "Raj", "raj@gmail.com"),
        User::new(3, "Rajesh", "rajesh@gmail.com"),
    ]
}
