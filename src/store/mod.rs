//! # User Stores
//!
//! A [`UserStore`] owns the registered [`User`] records. Two backends ship with
//! the crate:
//!
//! - [`InMemoryUserStore`] - a process-local list, used by tests and when no
//!   users file is configured
//! - [`JsonFileUserStore`] - a `{"users": [...]}` JSON document on disk
//!
//! Every call is atomic on its own. Nothing is promised across calls, so two
//! processes writing the same users file can race.

pub mod error;
pub mod json_file;
pub mod memory;

pub use error::*;
pub use json_file::JsonFileUserStore;
pub use memory::InMemoryUserStore;

use crate::model::User;
use tracing::info;

/// Storage contract for user records, keyed by username.
pub trait UserStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Returns `false` without writing if the username is already taken.
    fn add_user(&self, user: User) -> Result<bool>;

    /// Returns `false` if no record with that username exists.
    fn update_user(&self, user: User) -> Result<bool>;

    /// Returns `false` if no record with that username exists.
    fn delete_user(&self, username: &str) -> Result<bool>;

    fn list_all_users(&self) -> Result<Vec<User>>;
}

/// Adds `admin/admin123` and `user/user123` when the store has no users yet.
///
/// Returns whether anything was written.
pub fn seed_default_users(store: &dyn UserStore) -> Result<bool> {
    if !store.list_all_users()?.is_empty() {
        return Ok(false);
    }
    store.add_user(User::new("admin", "admin123", "admin"))?;
    store.add_user(User::new("user", "user123", "user"))?;
    info!("Seeded default users");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_only_touches_empty_stores() {
        let store = InMemoryUserStore::new();
        assert!(seed_default_users(&store).unwrap());
        assert!(!seed_default_users(&store).unwrap());

        let users = store.list_all_users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(
            store.find_by_username("admin").unwrap().unwrap().role,
            "admin"
        );
    }
}
