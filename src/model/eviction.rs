use std::fmt;

/// Cache eviction strategy attached to a [`CacheDbSpec`](crate::model::CacheDbSpec).
///
/// The policy is descriptive only; no entries are ever evicted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// Least recently used entries go first.
    Lru,
    /// Oldest entries go first.
    Fifo,
}

impl EvictionPolicy {
    /// Maps a configuration value to a policy.
    ///
    /// Only the exact string `"LRU"` selects [`EvictionPolicy::Lru`]. Every other
    /// value, including `"lru"` and a missing field, selects [`EvictionPolicy::Fifo`].
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("LRU") => EvictionPolicy::Lru,
            _ => EvictionPolicy::Fifo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EvictionPolicy::Lru => "LRU",
            EvictionPolicy::Fifo => "FIFO",
        }
    }

    /// Human-readable summary of what the policy would evict.
    pub fn describe(&self) -> &'static str {
        match self {
            EvictionPolicy::Lru => "Evicting least recently used items",
            EvictionPolicy::Fifo => "Evicting oldest items first",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
