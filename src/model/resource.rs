use super::EvictionPolicy;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier assigned to a resource by the [`ResourceManager`](crate::manager::ResourceManager).
///
/// Ids are handed out sequentially starting at `1` and render as plain decimal
/// strings, so `ResourceId(3)` displays as `"3"` and parses back from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u64);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ResourceId)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        ResourceId(id)
    }
}

/// Type-specific fields of an application service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppServiceSpec {
    pub runtime: String,
    pub region: String,
    pub replica_count: u32,
}

/// Type-specific fields of a storage account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountSpec {
    pub encryption_enabled: bool,
    pub max_size_gb: u64,
}

/// Type-specific fields of a cache database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheDbSpec {
    pub ttl_seconds: u64,
    pub capacity_mb: u64,
    #[serde(default = "fifo", deserialize_with = "eviction_from_config")]
    pub eviction_policy: EvictionPolicy,
}

fn fifo() -> EvictionPolicy {
    EvictionPolicy::from_config(None)
}

// Any JSON value is accepted; only the string "LRU" selects LRU.
fn eviction_from_config<'de, D>(deserializer: D) -> Result<EvictionPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(EvictionPolicy::from_config(raw.as_str()))
}

/// The closed set of built-in resource payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    AppService(AppServiceSpec),
    StorageAccount(StorageAccountSpec),
    CacheDb(CacheDbSpec),
}

impl ResourceKind {
    /// The factory tag this payload is registered under.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ResourceKind::AppService(_) => "AppService",
            ResourceKind::StorageAccount(_) => "StorageAccount",
            ResourceKind::CacheDb(_) => "CacheDB",
        }
    }
}

/// Row returned by [`ResourceManager::list_resources`](crate::manager::ResourceManager::list_resources).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSummary {
    pub id: ResourceId,
    pub name: String,
    pub state: crate::resource::LifecycleState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_id_round_trips_through_text() {
        let id: ResourceId = "42".parse().unwrap();
        assert_eq!(id, ResourceId(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<ResourceId>().is_err());
    }

    #[test]
    fn cache_spec_defaults_to_fifo_when_policy_missing() {
        let spec: CacheDbSpec =
            serde_json::from_value(json!({ "ttlSeconds": 60, "capacityMb": 256 })).unwrap();
        assert_eq!(spec.eviction_policy, EvictionPolicy::Fifo);
    }

    #[test]
    fn cache_spec_ignores_non_string_policy() {
        let spec: CacheDbSpec = serde_json::from_value(
            json!({ "ttlSeconds": 60, "capacityMb": 256, "evictionPolicy": 7 }),
        )
        .unwrap();
        assert_eq!(spec.eviction_policy, EvictionPolicy::Fifo);
    }

    #[test]
    fn app_service_spec_requires_every_field() {
        let err = serde_json::from_value::<AppServiceSpec>(
            json!({ "runtime": "Python", "region": "us-east-1" }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("replicaCount"));
    }
}
