use super::AuthProvider;
use tracing::{debug, warn};

/// Placeholder for an external authentication service.
///
/// No request is made. Any non-empty username/password pair is accepted, so this
/// provider must never guard anything real.
#[derive(Debug, Clone)]
pub struct RemoteAuthProvider {
    service_url: String,
    api_key: String,
}

impl RemoteAuthProvider {
    pub fn new(service_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }
}

impl AuthProvider for RemoteAuthProvider {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        debug!(
            service_url = %self.service_url,
            username,
            has_api_key = !self.api_key.is_empty(),
            "Authenticating against remote service"
        );
        let accepted = !username.is_empty() && !password.is_empty();
        if !accepted {
            warn!(username, "Remote authentication rejected");
        }
        accepted
    }

    fn service_name(&self) -> String {
        format!("Service Authentication ({})", self.service_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_pair() {
        let provider = RemoteAuthProvider::new("https://auth.example.com", "key");
        assert_eq!(provider.service_url(), "https://auth.example.com");
        assert!(provider.authenticate("anyone", "anything"));
        assert!(!provider.authenticate("", "anything"));
        assert!(!provider.authenticate("anyone", ""));
        assert_eq!(
            provider.service_name(),
            "Service Authentication (https://auth.example.com)"
        );
    }
}
