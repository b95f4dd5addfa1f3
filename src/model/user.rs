use serde::{Deserialize, Serialize};

/// Role assigned when a stored record does not carry one.
pub const DEFAULT_ROLE: &str = "user";

/// Represents a registered user of the resource manager.
///
/// Users are owned by a [`UserStore`](crate::store::UserStore). The
/// [`ResourceManager`](crate::manager::ResourceManager) only keeps a copy of the
/// user bound to the active session.
///
/// # Security
/// The password is kept and compared in plaintext. A real deployment must store a
/// salted hash instead; the `authenticate(username, password) -> bool` contract of
/// [`AuthProvider`](crate::auth::AuthProvider) stays the same when it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `username` - Unique login name
    /// * `password` - Plaintext password
    /// * `role` - Free-form role label such as `"user"` or `"admin"`
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
