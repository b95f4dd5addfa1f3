//! # System Configuration
//!
//! [`SystemConfig`] decides which user store and which authentication backend a
//! [`ResourceManager`] is built with. Log verbosity is not part of it; that stays
//! with `RUST_LOG` (see [`setup_tracing`](super::setup_tracing)).
//!
//! | Variable                  | Effect                                           |
//! |---------------------------|--------------------------------------------------|
//! | `CLOUD_RM_USERS_FILE`     | JSON users file; unset keeps users in memory     |
//! | `CLOUD_RM_AUTH_URL`       | switches to the remote authentication stub       |
//! | `CLOUD_RM_AUTH_API_KEY`   | API key passed to the remote stub                |
//! | `CLOUD_RM_CHANNEL_BUFFER` | request buffer of the manager actor (default 32) |

use crate::auth::{AuthProvider, FileAuthProvider, RemoteAuthProvider};
use crate::manager::ResourceManager;
use crate::store::{InMemoryUserStore, JsonFileUserStore, StoreError, UserStore};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Authentication backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthConfig {
    /// Check credentials against the configured user store.
    #[default]
    File,
    /// Remote stub that accepts any non-empty credentials.
    Service { url: String, api_key: String },
}

/// Everything needed to assemble a manager and its actor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub users_file: Option<PathBuf>,
    pub auth: AuthConfig,
    pub channel_buffer: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            users_file: None,
            auth: AuthConfig::default(),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl SystemConfig {
    /// Reads the `CLOUD_RM_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("CLOUD_RM_USERS_FILE").filter(|p| !p.is_empty()) {
            config.users_file = Some(PathBuf::from(path));
        }
        if let Some(url) = lookup("CLOUD_RM_AUTH_URL").filter(|u| !u.is_empty()) {
            config.auth = AuthConfig::Service {
                url,
                api_key: lookup("CLOUD_RM_AUTH_API_KEY").unwrap_or_default(),
            };
        }
        if let Some(raw) = lookup("CLOUD_RM_CHANNEL_BUFFER") {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => config.channel_buffer = size,
                _ => warn!(value = %raw, "Ignoring invalid CLOUD_RM_CHANNEL_BUFFER"),
            }
        }
        config
    }

    /// Opens the configured user store.
    pub fn build_store(&self) -> Result<Arc<dyn UserStore>, StoreError> {
        Ok(match &self.users_file {
            Some(path) => Arc::new(JsonFileUserStore::open(path)?),
            None => Arc::new(InMemoryUserStore::new()),
        })
    }

    pub fn build_auth(&self, store: Arc<dyn UserStore>) -> Box<dyn AuthProvider> {
        match &self.auth {
            AuthConfig::File => Box::new(FileAuthProvider::new(store)),
            AuthConfig::Service { url, api_key } => {
                Box::new(RemoteAuthProvider::new(url.clone(), api_key.clone()))
            }
        }
    }

    /// Wires a manager from the configured store and authentication backend.
    pub fn build_manager(&self) -> Result<ResourceManager, StoreError> {
        let store = self.build_store()?;
        let auth = self.build_auth(store.clone());
        info!(
            users_file = ?self.users_file,
            provider = %auth.service_name(),
            "Manager configured"
        );
        Ok(ResourceManager::new(store, auth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(SystemConfig::from_vars(vars(&[])), SystemConfig::default());
        let config = SystemConfig::default();
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
        assert_eq!(config.auth, AuthConfig::File);
    }

    #[test]
    fn reads_all_variables() {
        let config = SystemConfig::from_vars(vars(&[
            ("CLOUD_RM_USERS_FILE", "data/users.json"),
            ("CLOUD_RM_AUTH_URL", "https://auth.example.com"),
            ("CLOUD_RM_AUTH_API_KEY", "secret"),
            ("CLOUD_RM_CHANNEL_BUFFER", "8"),
        ]));
        assert_eq!(config.users_file, Some(PathBuf::from("data/users.json")));
        assert_eq!(
            config.auth,
            AuthConfig::Service {
                url: "https://auth.example.com".into(),
                api_key: "secret".into(),
            }
        );
        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn invalid_buffer_falls_back_to_default() {
        let config = SystemConfig::from_vars(vars(&[("CLOUD_RM_CHANNEL_BUFFER", "0")]));
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
    }

    #[test]
    fn deserializes_from_json() {
        let config: SystemConfig = serde_json::from_str(
            r#"{ "auth": { "kind": "service", "url": "https://a", "api_key": "k" } }"#,
        )
        .unwrap();
        assert_eq!(config.users_file, None);
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
        assert!(matches!(config.auth, AuthConfig::Service { .. }));
    }

    #[test]
    fn build_manager_uses_selected_provider() {
        let manager = SystemConfig::default().build_manager().unwrap();
        assert_eq!(manager.auth_service_name(), "File-Based Authentication");

        let config = SystemConfig {
            auth: AuthConfig::Service {
                url: "https://auth.example.com".into(),
                api_key: String::new(),
            },
            ..SystemConfig::default()
        };
        let manager = config.build_manager().unwrap();
        assert!(manager.auth_service_name().starts_with("Service Authentication"));
    }
}
