use super::AuthProvider;
use crate::store::UserStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authenticates against the records of a [`UserStore`].
///
/// Fails closed: an unknown user, a wrong password and a store error all reject.
/// Passwords are compared in plaintext.
#[derive(Clone)]
pub struct FileAuthProvider {
    store: Arc<dyn UserStore>,
}

impl FileAuthProvider {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

impl AuthProvider for FileAuthProvider {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        match self.store.find_by_username(username) {
            Ok(Some(user)) if user.password == password => {
                debug!(username, "Credentials accepted");
                true
            }
            Ok(Some(_)) => {
                warn!(username, "Invalid password");
                false
            }
            Ok(None) => {
                warn!(username, "User not found");
                false
            }
            Err(error) => {
                warn!(username, %error, "User store unavailable");
                false
            }
        }
    }

    fn service_name(&self) -> String {
        "File-Based Authentication".to_string()
    }
}
