use super::{Result, UserStore};
use crate::model::User;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local user store.
///
/// Records keep their insertion order, matching what the JSON backend returns.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        for user in users {
            // Later duplicates are dropped, same as add_user.
            let mut guard = store.write();
            if !guard.iter().any(|u| u.username == user.username) {
                guard.push(user);
            }
        }
        store
    }

    // A panic while holding the lock cannot leave a half-written record behind,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.read().iter().find(|u| u.username == username).cloned())
    }

    fn add_user(&self, user: User) -> Result<bool> {
        let mut users = self.write();
        if users.iter().any(|u| u.username == user.username) {
            return Ok(false);
        }
        users.push(user);
        Ok(true)
    }

    fn update_user(&self, user: User) -> Result<bool> {
        let mut users = self.write();
        match users.iter_mut().find(|u| u.username == user.username) {
            Some(existing) => {
                *existing = user;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_user(&self, username: &str) -> Result<bool> {
        let mut users = self.write();
        let before = users.len();
        users.retain(|u| u.username != username);
        Ok(users.len() < before)
    }

    fn list_all_users(&self) -> Result<Vec<User>> {
        Ok(self.read().clone())
    }
}
