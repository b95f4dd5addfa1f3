//! The built-in typed resource record.

use super::{LifecycleEvent, LifecycleState, Resource, ResourceError};
use crate::model::{AppServiceSpec, CacheDbSpec, ResourceId, ResourceKind, StorageAccountSpec};
use std::fmt::Write;

/// A cloud resource with an immutable typed payload and a mutable lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudResource {
    id: ResourceId,
    name: String,
    kind: ResourceKind,
    state: LifecycleState,
}

impl CloudResource {
    /// Creates a resource in [`LifecycleState::Created`].
    pub fn new(id: ResourceId, name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            state: LifecycleState::Created,
        }
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }
}

impl Resource for CloudResource {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, event: LifecycleEvent) -> Result<LifecycleState, ResourceError> {
        self.state = self.state.apply(event)?;
        Ok(self.state)
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn details(&self) -> String {
        let mut out = format!("{}[{}]: {}\n", self.kind.type_tag(), self.id, self.name);
        // Writing into a String cannot fail.
        let _ = write!(out, "  State: {}", self.state);
        match &self.kind {
            ResourceKind::AppService(AppServiceSpec {
                runtime,
                region,
                replica_count,
            }) => {
                let _ = write!(
                    out,
                    "\n  Runtime: {runtime}\n  Region: {region}\n  Replicas: {replica_count}"
                );
            }
            ResourceKind::StorageAccount(StorageAccountSpec {
                encryption_enabled,
                max_size_gb,
            }) => {
                let encryption = if *encryption_enabled { "Enabled" } else { "Disabled" };
                let _ = write!(
                    out,
                    "\n  Encryption: {encryption}\n  Max Size: {max_size_gb}GB"
                );
            }
            ResourceKind::CacheDb(CacheDbSpec {
                ttl_seconds,
                capacity_mb,
                eviction_policy,
            }) => {
                let _ = write!(
                    out,
                    "\n  TTL: {ttl_seconds}s\n  Capacity: {capacity_mb}MB\n  Eviction: {eviction_policy}"
                );
            }
        }
        out
    }
}
