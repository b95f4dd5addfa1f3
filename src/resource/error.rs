//! Error types for resources and the resource factory.

use super::{LifecycleEvent, LifecycleState};
use thiserror::Error;

/// Errors raised by a resource lifecycle operation or by the factory.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// The current lifecycle state does not accept the requested event.
    #[error("Cannot {event} resource in state {state}: {reason}")]
    InvalidTransition {
        event: LifecycleEvent,
        state: LifecycleState,
        reason: &'static str,
    },

    /// No constructor is registered for the requested type tag.
    #[error("Unknown resource type: {0}")]
    UnknownType(String),

    /// The field set is missing a required field or carries a badly typed one.
    #[error("Invalid fields for {type_tag}: {reason}")]
    InvalidFields { type_tag: String, reason: String },
}

impl ResourceError {
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, ResourceError::InvalidTransition { .. })
    }
}
