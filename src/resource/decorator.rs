//! # Logging Decorator
//!
//! [`LoggingDecorator`] wraps any [`Resource`] and emits a `tracing` event before
//! and after every lifecycle operation. It never changes the outcome: the wrapped
//! call's state and error are passed through untouched, so a decorated resource is
//! observably identical to the resource it wraps.
//!
//! Each event carries the resource name and the operation as structured fields;
//! outcome events add either the new `state` or the `error`.
//!
//! No timestamp is recorded on the event itself. The `fmt` layer installed by
//! [`setup_tracing`](crate::runtime::setup_tracing) stamps every record, so
//! without it (or another timestamping subscriber) the records carry none.
//!
//! ```text
//! INFO  resource="MyWebApp" operation=start            Attempting operation
//! INFO  resource="MyWebApp" operation=start state=RUNNING Operation succeeded
//! WARN  resource="MyWebApp" operation=delete error=...  Operation failed
//! ```

use super::{LifecycleEvent, LifecycleState, Resource, ResourceError};
use crate::model::ResourceId;
use tracing::{info, warn};

/// Transparent wrapper that logs lifecycle operations of the inner resource.
///
/// Decorators stack: `LoggingDecorator<LoggingDecorator<R>>` logs twice and still
/// behaves exactly like `R`.
#[derive(Debug, Clone)]
pub struct LoggingDecorator<R> {
    inner: R,
}

impl<R: Resource> LoggingDecorator<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Resource> Resource for LoggingDecorator<R> {
    fn id(&self) -> ResourceId {
        self.inner.id()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn apply(&mut self, event: LifecycleEvent) -> Result<LifecycleState, ResourceError> {
        let resource = self.inner.name().to_string();
        info!(%resource, operation = %event, "Attempting operation");
        match self.inner.apply(event) {
            Ok(state) => {
                info!(%resource, operation = %event, %state, "Operation succeeded");
                Ok(state)
            }
            Err(error) => {
                warn!(%resource, operation = %event, %error, "Operation failed");
                Err(error)
            }
        }
    }

    fn state(&self) -> LifecycleState {
        self.inner.state()
    }

    fn details(&self) -> String {
        self.inner.details()
    }
}
