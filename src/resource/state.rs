//! # Lifecycle State Machine
//!
//! Every resource owns exactly one [`LifecycleState`]. Operations are modelled as
//! [`LifecycleEvent`]s and applied through the pure function
//! [`LifecycleState::apply`], which either yields the next state or an
//! [`InvalidTransition`](ResourceError::InvalidTransition) error.
//!
//! | Current   | start     | stop      | delete    |
//! |-----------|-----------|-----------|-----------|
//! | CREATED   | RUNNING   | fails     | DELETED   |
//! | RUNNING   | fails     | STOPPED   | fails     |
//! | STOPPED   | RUNNING   | fails     | DELETED   |
//! | DELETED   | fails     | fails     | fails     |
//!
//! DELETED is terminal.

use super::ResourceError;
use std::fmt;

/// The four states a resource can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    #[default]
    Created,
    Running,
    Stopped,
    Deleted,
}

/// Operations that drive a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Start,
    Stop,
    Delete,
}

impl LifecycleState {
    /// Returns the state that `event` leads to, or the reason it is refused.
    ///
    /// The receiver is never modified; callers replace their state with the
    /// returned value only on success.
    pub fn apply(self, event: LifecycleEvent) -> Result<LifecycleState, ResourceError> {
        use LifecycleEvent::*;
        use LifecycleState::*;

        let refuse = |reason: &'static str| ResourceError::InvalidTransition {
            event,
            state: self,
            reason,
        };

        match (self, event) {
            (Created, Start) | (Stopped, Start) => Ok(Running),
            (Running, Stop) => Ok(Stopped),
            (Created, Delete) | (Stopped, Delete) => Ok(Deleted),

            (Created, Stop) => Err(refuse("resource hasn't been started")),
            (Running, Start) => Err(refuse("resource is already running")),
            (Running, Delete) => Err(refuse("resource is running, stop it first")),
            (Stopped, Stop) => Err(refuse("resource is already stopped")),
            (Deleted, Start) => Err(refuse("resource has been deleted")),
            (Deleted, Stop) => Err(refuse("resource has been deleted")),
            (Deleted, Delete) => Err(refuse("resource is already deleted")),
        }
    }

    /// Upper-case state name, e.g. `"RUNNING"`.
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::Created => "CREATED",
            LifecycleState::Running => "RUNNING",
            LifecycleState::Stopped => "STOPPED",
            LifecycleState::Deleted => "DELETED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleState::Deleted)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LifecycleEvent::Start => "start",
            LifecycleEvent::Stop => "stop",
            LifecycleEvent::Delete => "delete",
        })
    }
}
