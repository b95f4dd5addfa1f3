//! JSON-file user store.
//!
//! The file holds a single document:
//!
//! ```json
//! { "users": [ { "username": "admin", "password": "admin123", "role": "admin" } ] }
//! ```
//!
//! Each operation reads the whole document, and mutating operations write it
//! back. The file and its parent directory are created on first use.

use super::{Result, UserStore};
use crate::model::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct UsersDocument {
    #[serde(default)]
    users: Vec<User>,
}

/// User store persisted as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    /// Opens the store at `path`, creating an empty document if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        if !store.path.exists() {
            if let Some(parent) = store.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            store.write(&UsersDocument::default())?;
            debug!(path = %store.path.display(), "Created users file");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<UsersDocument> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, doc: &UsersDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl UserStore for JsonFileUserStore {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .read()?
            .users
            .into_iter()
            .find(|u| u.username == username))
    }

    fn add_user(&self, user: User) -> Result<bool> {
        let mut doc = self.read()?;
        if doc.users.iter().any(|u| u.username == user.username) {
            return Ok(false);
        }
        doc.users.push(user);
        self.write(&doc)?;
        Ok(true)
    }

    fn update_user(&self, user: User) -> Result<bool> {
        let mut doc = self.read()?;
        let Some(existing) = doc.users.iter_mut().find(|u| u.username == user.username) else {
            return Ok(false);
        };
        *existing = user;
        self.write(&doc)?;
        Ok(true)
    }

    fn delete_user(&self, username: &str) -> Result<bool> {
        let mut doc = self.read()?;
        let before = doc.users.len();
        doc.users.retain(|u| u.username != username);
        if doc.users.len() == before {
            return Ok(false);
        }
        self.write(&doc)?;
        Ok(true)
    }

    fn list_all_users(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users)
    }
}
