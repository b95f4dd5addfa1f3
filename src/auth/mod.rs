//! # Authentication Providers
//!
//! An [`AuthProvider`] answers one question: are these credentials valid? It does
//! not own users; the [`ResourceManager`](crate::manager::ResourceManager) still
//! looks the user up in its [`UserStore`](crate::store::UserStore) after a
//! provider accepts the credentials.
//!
//! - [`FileAuthProvider`] checks credentials against a user store.
//! - [`RemoteAuthProvider`] stands in for an external identity service.

pub mod file;
pub mod remote;

pub use file::FileAuthProvider;
pub use remote::RemoteAuthProvider;

/// Pluggable credential check.
pub trait AuthProvider: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> bool;

    /// Descriptive name of the backend, for display only.
    fn service_name(&self) -> String;
}
