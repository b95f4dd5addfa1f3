//! Error types for the resource manager.

use crate::model::ResourceId;
use crate::resource::ResourceError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors returned by [`ResourceManager`](super::ResourceManager) operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The operation needs an active session.
    #[error("You must be logged in to perform this operation")]
    Unauthorized,

    /// The authentication provider rejected the credentials.
    #[error("Invalid credentials for user: {0}")]
    InvalidCredentials(String),

    /// The provider accepted the credentials but the user store has no such user.
    #[error("User authenticated but not found in user store: {0}")]
    UnknownUser(String),

    /// A user with the same username is already registered.
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// No resource is stored under the id.
    #[error("Resource not found: {0}")]
    NotFound(ResourceId),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("User store error: {0}")]
    Store(#[from] StoreError),
}
