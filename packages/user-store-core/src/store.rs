//! User record store.
//!
//! The store owns an insertion-ordered collection of [`User`] records
//! behind a single `RwLock`. Every operation acquires the lock once and
//! runs to completion, so update and delete are atomic read-modify-write.

use std::sync::RwLock;

use crate::error::StoreError;
use crate::user::{seed_users, User};

/// Result of looking a record up by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// First record carrying the identifier
    Found(User),
    /// No record carries the identifier
    NotFound,
}

impl Lookup {
    /// Returns true if a record was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Converts the lookup into an `Option`.
    pub fn into_option(self) -> Option<User> {
        match self {
            Lookup::Found(user) => Some(user),
            Lookup::NotFound => None,
        }
    }
}

/// In-memory user record store.
#[derive(Debug, Default)]
pub struct UserStore {
    /// Records in insertion order; identifiers may repeat
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given records in order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Creates a store holding the three seed records.
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Returns a snapshot of all records in insertion order.
    pub fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.clone())
    }

    /// Looks up the first record whose identifier equals `id`.
    pub fn get(&self, id: i64) -> Result<Lookup, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        let lookup = match users.iter().find(|u| u.id == id) {
            Some(user) => Lookup::Found(user.clone()),
            None => Lookup::NotFound,
        };
        tracing::debug!("get user {}: found={}", id, lookup.is_found());
        Ok(lookup)
    }

    /// Appends a record. Identifiers are not checked for collisions.
    pub fn add(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        tracing::debug!("add user {}", user.id);
        users.push(user);
        Ok(())
    }

    /// Replaces the first record whose identifier equals `user.id`.
    ///
    /// # Errors
    /// `StoreError::UserNotFound` when no record carries the identifier;
    /// the collection is left untouched in that case.
    pub fn update(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(StoreError::UserNotFound { id: user.id })?;
        tracing::debug!("update user {}", user.id);
        *slot = user;
        Ok(())
    }

    /// Removes every record whose identifier equals `id`.
    ///
    /// # Returns
    /// Number of records removed; zero when the identifier is absent.
    pub fn delete(&self, id: i64) -> Result<usize, StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = users.len();
        users.retain(|u| u.id != id);
        let removed = before - users.len();
        tracing::debug!("delete user {}: removed {}", id, removed);
        Ok(removed)
    }

    /// Returns the number of records.
    pub fn len(&self) -> Result<usize, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.len())
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = UserStore::seeded();
        let users = store.list_all().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, "Shivam");
        assert_eq!(users[2].name, "Rajesh");
    }

    #[test]
    fn test_get_returns_first_match() {
        let store = UserStore::with_users(vec![
            User::new(5, "first", "a@e.com"),
            User::new(5, "second", "b@e.com"),
        ]);
        let found = store.get(5).unwrap().into_option().unwrap();
        assert_eq!(found.name, "first");
    }

    #[test]
    fn test_get_missing() {
        let store = UserStore::seeded();
        assert_eq!(store.get(999).unwrap(), Lookup::NotFound);
    }

    #[test]
    fn test_add_permits_duplicates() {
        let store = UserStore::seeded();
        store.add(User::new(1, "dup", "dup@e.com")).unwrap();
        assert_eq!(store.len().unwrap(), 4);
        let ones = store
            .list_all()
            .unwrap()
            .into_iter()
            .filter(|u| u.id == 1)
            .count();
        assert_eq!(ones, 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = UserStore::seeded();
        store.update(User::new(2, "Ravi", "ravi@e.com")).unwrap();
        let users = store.list_all().unwrap();
        assert_eq!(users[1], User::new(2, "Ravi", "ravi@e.com"));
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn test_update_missing_leaves_store_untouched() {
        let store = UserStore::seeded();
        let before = store.list_all().unwrap();
        let err = store.update(User::new(42, "Ghost", "g@e.com")).unwrap_err();
        assert_eq!(err, StoreError::UserNotFound { id: 42 });
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn test_update_only_first_duplicate() {
        let store = UserStore::with_users(vec![
            User::new(9, "a", "a@e.com"),
            User::new(9, "b", "b@e.com"),
        ]);
        store.update(User::new(9, "c", "c@e.com")).unwrap();
        let names: Vec<String> = store.list_all().unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let store = UserStore::with_users(vec![
            User::new(1, "a", "a@e.com"),
            User::new(2, "b", "b@e.com"),
            User::new(1, "c", "c@e.com"),
        ]);
        assert_eq!(store.delete(1).unwrap(), 2);
        assert_eq!(store.list_all().unwrap(), vec![User::new(2, "b", "b@e.com")]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = UserStore::seeded();
        assert_eq!(store.delete(999).unwrap(), 0);
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = UserStore::new();
        assert!(store.is_empty().unwrap());
        assert!(store.list_all().unwrap().is_empty());
    }
}
