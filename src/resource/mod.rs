//! # Cloud Resources
//!
//! This module holds everything that lives *inside* a single resource:
//!
//! - [`state`] - the lifecycle state machine ([`LifecycleState`], [`LifecycleEvent`])
//! - [`entity`] - [`CloudResource`], the built-in typed resource record
//! - [`factory`] - [`ResourceFactory`], the tag-to-constructor registry
//! - [`decorator`] - [`LoggingDecorator`], the transparent logging wrapper
//! - [`error`] - [`ResourceError`]
//!
//! ## The `Resource` contract
//!
//! Both [`CloudResource`] and [`LoggingDecorator`] implement [`Resource`]. The
//! [`ResourceManager`](crate::manager::ResourceManager) only ever talks to
//! `Box<dyn Resource>`, so it cannot tell a decorated resource from a plain one.
//! `Box<R>` forwards the contract as well, which is what lets decorators stack
//! on top of boxed trait objects.
//!
//! Every lifecycle operation funnels through [`Resource::apply`]. The `start`,
//! `stop` and `delete` shorthands live on [`ResourceExt`], which is implemented
//! for every resource and cannot be overridden, so a wrapper and the resource
//! it wraps always agree on the outcome.

pub mod decorator;
pub mod entity;
pub mod error;
pub mod factory;
pub mod state;

pub use decorator::LoggingDecorator;
pub use entity::CloudResource;
pub use error::ResourceError;
pub use factory::{Constructor, ResourceFactory};
pub use state::{LifecycleEvent, LifecycleState};

use crate::model::ResourceId;
use std::fmt::Debug;

/// Capability interface shared by resources and their wrappers.
pub trait Resource: Debug + Send {
    fn id(&self) -> ResourceId;

    fn name(&self) -> &str;

    /// Applies a lifecycle event. On failure the state is left untouched.
    fn apply(&mut self, event: LifecycleEvent) -> Result<LifecycleState, ResourceError>;

    /// Current lifecycle state. Never fails.
    fn state(&self) -> LifecycleState;

    /// Deterministic multi-line summary of the resource.
    fn details(&self) -> String;
}

/// Lifecycle shorthands available on every [`Resource`].
pub trait ResourceExt: Resource {
    fn start(&mut self) -> Result<LifecycleState, ResourceError> {
        self.apply(LifecycleEvent::Start)
    }

    fn stop(&mut self) -> Result<LifecycleState, ResourceError> {
        self.apply(LifecycleEvent::Stop)
    }

    fn delete(&mut self) -> Result<LifecycleState, ResourceError> {
        self.apply(LifecycleEvent::Delete)
    }
}

impl<R: Resource + ?Sized> ResourceExt for R {}

impl<R: Resource + ?Sized> Resource for Box<R> {
    fn id(&self) -> ResourceId {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&mut self, event: LifecycleEvent) -> Result<LifecycleState, ResourceError> {
        (**self).apply(event)
    }

    fn state(&self) -> LifecycleState {
        (**self).state()
    }

    fn details(&self) -> String {
        (**self).details()
    }
}
