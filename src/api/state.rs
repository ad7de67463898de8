//! Application state shared by every request

use std::sync::Arc;

use axum::http::StatusCode;

use crate::config::AuthzConfig;
use crate::domain::authz::{AccessGate, LegacyResourceMatcher};
use crate::domain::store::EntityStore;
use crate::domain::user::CredentialStore;

/// Application state
///
/// The stores are kept next to the gate so readiness probes can reach them.
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<AccessGate>,
    pub credentials: Arc<dyn CredentialStore>,
    pub entities: Arc<dyn EntityStore>,
    pub deny_status: StatusCode,
    pub realm: Arc<str>,
}

impl AppState {
    /// Build state with default gate settings (401 denials, default timeout)
    pub fn new(credentials: Arc<dyn CredentialStore>, entities: Arc<dyn EntityStore>) -> Self {
        Self {
            gate: Arc::new(AccessGate::new(credentials.clone(), entities.clone())),
            credentials,
            entities,
            deny_status: StatusCode::UNAUTHORIZED,
            realm: Arc::from("registry"),
        }
    }

    /// Build state from the `authz` configuration section
    pub fn from_config(
        config: &AuthzConfig,
        credentials: Arc<dyn CredentialStore>,
        entities: Arc<dyn EntityStore>,
    ) -> Result<Self, regex::Error> {
        let legacy = LegacyResourceMatcher::new(&config.legacy_image_pattern)?;
        tracing::debug!(
            legacy_pattern = legacy.pattern(),
            timeout_ms = config.evaluation_timeout_ms,
            "Configuring access gate"
        );
        let gate = AccessGate::new(credentials.clone(), entities.clone())
            .with_legacy_matcher(legacy)
            .with_timeout(config.evaluation_timeout());

        Ok(Self {
            gate: Arc::new(gate),
            credentials,
            entities,
            deny_status: config.deny_status.status_code(),
            realm: Arc::from(config.realm.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::DenyStatus;
    use crate::domain::store::mock::MockEntityStore;
    use crate::domain::user::MockCredentialStore;

    #[test]
    fn test_from_config() {
        let config = AuthzConfig {
            deny_status: DenyStatus::NotFound,
            evaluation_timeout_ms: 750,
            realm: "acme-registry".to_string(),
            ..AuthzConfig::default()
        };

        let state = AppState::from_config(
            &config,
            Arc::new(MockCredentialStore::new()),
            Arc::new(MockEntityStore::new()),
        )
        .unwrap();

        assert_eq!(state.deny_status, StatusCode::NOT_FOUND);
        assert_eq!(state.gate.timeout(), Duration::from_millis(750));
        assert_eq!(&*state.realm, "acme-registry");
    }

    #[test]
    fn test_invalid_legacy_pattern() {
        let config = AuthzConfig {
            legacy_image_pattern: "^/v1/images(".to_string(),
            ..AuthzConfig::default()
        };

        let result = AppState::from_config(
            &config,
            Arc::new(MockCredentialStore::new()),
            Arc::new(MockEntityStore::new()),
        );
        assert!(result.is_err());
    }
}
