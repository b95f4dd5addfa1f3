//! # Actor Errors
//!
//! Errors seen by [`ManagerClient`](super::ManagerClient) callers: either the
//! request never got an answer, or the manager answered with a failure.

use crate::manager::ManagerError;
use thiserror::Error;

/// Errors that can occur when talking to the manager actor.
#[derive(Debug, Error)]
pub enum ActorError {
    #[error("Actor closed")]
    ActorClosed,

    #[error("Actor dropped response channel")]
    ActorDropped,

    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Manager(#[from] ManagerError),
}

impl ActorError {
    /// The manager's own error, if the request reached it.
    pub fn as_manager(&self) -> Option<&ManagerError> {
        match self {
            ActorError::Manager(e) => Some(e),
            _ => None,
        }
    }
}
