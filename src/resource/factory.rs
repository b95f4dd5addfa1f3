//! # Resource Factory
//!
//! Maps a type tag to a [`Constructor`]. The three built-in tags (`AppService`,
//! `StorageAccount`, `CacheDB`) are registered by [`ResourceFactory::new`];
//! additional types can be added, or built-ins replaced, with
//! [`ResourceFactory::register`].
//!
//! Field sets are JSON objects with camelCase keys. Every type requires `name`
//! plus its own fields:
//!
//! | Tag              | Required                                 | Optional         |
//! |------------------|------------------------------------------|------------------|
//! | `AppService`     | `runtime`, `region`, `replicaCount`      |                  |
//! | `StorageAccount` | `encryptionEnabled`, `maxSizeGb`         |                  |
//! | `CacheDB`        | `ttlSeconds`, `capacityMb`               | `evictionPolicy` |
//!
//! `evictionPolicy` selects LRU only for the exact string `"LRU"`; anything else
//! falls back to FIFO. See [`EvictionPolicy::from_config`](crate::model::EvictionPolicy::from_config).
//!
//! Required fields are typed as well as present. `runtime` and `region` must be
//! strings, `encryptionEnabled` a boolean, and the counts and sizes non-negative
//! integers, so `"replicaCount": "3"` or `-1` is rejected with
//! [`ResourceError::InvalidFields`] instead of being stored as given. Values are
//! never range-checked beyond fitting their integer type.

use super::{CloudResource, Resource, ResourceError};
use crate::model::{AppServiceSpec, CacheDbSpec, ResourceId, ResourceKind, StorageAccountSpec};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Builds a resource from its assigned id and a field set.
pub type Constructor =
    Box<dyn Fn(ResourceId, &Value) -> Result<Box<dyn Resource>, ResourceError> + Send + Sync>;

/// Registry of resource constructors keyed by type tag.
pub struct ResourceFactory {
    registry: HashMap<String, Constructor>,
}

impl ResourceFactory {
    /// Creates a factory with the built-in types registered.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register("AppService", |id, fields| {
            let (name, spec) = parse_fields::<AppServiceSpec>("AppService", fields)?;
            Ok(boxed(id, name, ResourceKind::AppService(spec)))
        });
        factory.register("StorageAccount", |id, fields| {
            let (name, spec) = parse_fields::<StorageAccountSpec>("StorageAccount", fields)?;
            Ok(boxed(id, name, ResourceKind::StorageAccount(spec)))
        });
        factory.register("CacheDB", |id, fields| {
            let (name, spec) = parse_fields::<CacheDbSpec>("CacheDB", fields)?;
            Ok(boxed(id, name, ResourceKind::CacheDb(spec)))
        });
        factory
    }

    /// Creates a factory with no registered types.
    pub fn empty() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// Adds a type, replacing any constructor already registered under `type_tag`.
    pub fn register<F>(&mut self, type_tag: impl Into<String>, constructor: F)
    where
        F: Fn(ResourceId, &Value) -> Result<Box<dyn Resource>, ResourceError>
            + Send
            + Sync
            + 'static,
    {
        let type_tag = type_tag.into();
        let replaced = self
            .registry
            .insert(type_tag.clone(), Box::new(constructor))
            .is_some();
        debug!(%type_tag, replaced, "Registered resource type");
    }

    /// Builds a resource of the given type in the CREATED state.
    pub fn create(
        &self,
        type_tag: &str,
        id: ResourceId,
        fields: &Value,
    ) -> Result<Box<dyn Resource>, ResourceError> {
        let constructor = self
            .registry
            .get(type_tag)
            .ok_or_else(|| ResourceError::UnknownType(type_tag.to_string()))?;
        constructor(id, fields)
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.registry.contains_key(type_tag)
    }

    /// Every registered tag, sorted.
    pub fn list_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.registry.keys().cloned().collect();
        types.sort();
        types
    }
}

impl Default for ResourceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResourceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFactory")
            .field("types", &self.list_types())
            .finish()
    }
}

#[derive(Deserialize)]
struct NameField {
    name: String,
}

/// Validates a field set and splits it into the resource name and its typed payload.
pub fn parse_fields<T: DeserializeOwned>(
    type_tag: &str,
    fields: &Value,
) -> Result<(String, T), ResourceError> {
    let invalid = |reason: String| ResourceError::InvalidFields {
        type_tag: type_tag.to_string(),
        reason,
    };
    if !fields.is_object() {
        return Err(invalid("expected an object of fields".to_string()));
    }
    let NameField { name } =
        NameField::deserialize(fields).map_err(|e| invalid(e.to_string()))?;
    let spec = T::deserialize(fields).map_err(|e| invalid(e.to_string()))?;
    Ok((name, spec))
}

fn boxed(id: ResourceId, name: String, kind: ResourceKind) -> Box<dyn Resource> {
    Box::new(CloudResource::new(id, name, kind))
}
