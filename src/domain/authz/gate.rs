use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::credentials::CredentialGate;
use super::decision::Decision;
use super::engine::AuthorizationEngine;
use super::error::AuthzError;
use super::legacy::LegacyResourceMatcher;
use super::path::ResourcePath;
use super::permission::Permission;
use crate::domain::store::EntityStore;
use crate::domain::user::{CredentialStore, User};

/// Default upper bound on one evaluation, store lookups included
pub const DEFAULT_EVALUATION_TIMEOUT: Duration = Duration::from_secs(5);

/// The parts of an inbound request the gate reasons over
#[derive(Debug, Clone)]
pub struct AccessRequest {
    method: Method,
    path: String,
    resource: String,
    authorization: Option<String>,
}

impl AccessRequest {
    /// `path` is the full request path; `resource` is the wildcard capture
    /// holding `namespace/repository[/...]`
    pub fn new(method: Method, path: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            resource: resource.into(),
            authorization: None,
        }
    }

    /// Attach the raw `Authorization` header value (builder pattern)
    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}

/// Runs the full access pipeline for one request
///
/// Holds no per-request state, so a single gate is shared by every request.
#[derive(Debug, Clone)]
pub struct AccessGate {
    credentials: CredentialGate,
    engine: AuthorizationEngine,
    legacy: LegacyResourceMatcher,
    timeout: Duration,
}

impl AccessGate {
    pub fn new(credentials: Arc<dyn CredentialStore>, entities: Arc<dyn EntityStore>) -> Self {
        Self {
            credentials: CredentialGate::new(credentials),
            engine: AuthorizationEngine::new(entities),
            legacy: LegacyResourceMatcher::v1_images(),
            timeout: DEFAULT_EVALUATION_TIMEOUT,
        }
    }

    /// Replace the legacy resource matcher (builder pattern)
    pub fn with_legacy_matcher(mut self, legacy: LegacyResourceMatcher) -> Self {
        self.legacy = legacy;
        self
    }

    /// Bound evaluation time (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Evaluate a request; never fails, never allows on error
    ///
    /// If the evaluation outlives the configured timeout, pending lookups are
    /// dropped and the request is denied as cancelled.
    pub async fn evaluate(&self, request: &AccessRequest) -> Decision {
        let decision = match timeout(self.timeout, self.check(request)).await {
            Ok(result) => Decision::from(result),
            Err(_) => Decision::Deny(AuthzError::Cancelled {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        };

        log_decision(request, &decision);
        decision
    }

    async fn check(&self, request: &AccessRequest) -> Result<User, AuthzError> {
        let resource = ResourcePath::parse(request.resource())?;
        let permission = Permission::from_method(request.method());

        let user = self
            .credentials
            .authenticate(request.authorization())
            .await?;

        if self.legacy.is_legacy(request.path()) {
            debug!(path = %request.path(), "Legacy image resource, skipping ownership checks");
            return Ok(user);
        }

        self.engine.authorize(&user, &resource, permission).await?;

        Ok(user)
    }
}

fn log_decision(request: &AccessRequest, decision: &Decision) {
    match decision {
        Decision::Allow(user) => debug!(
            method = %request.method(),
            path = %request.path(),
            username = %user.username(),
            "Access allowed"
        ),
        Decision::Deny(err @ (AuthzError::Store(_) | AuthzError::Cancelled { .. })) => warn!(
            method = %request.method(),
            path = %request.path(),
            kind = err.kind(),
            error = %err,
            "Access denied"
        ),
        Decision::Deny(err) => info!(
            method = %request.method(),
            path = %request.path(),
            kind = err.kind(),
            error = %err,
            "Access denied"
        ),
    }
}
