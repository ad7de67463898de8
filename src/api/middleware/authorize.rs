//! Repository authorization middleware for the registry surface

use std::time::Instant;

use axum::{
    extract::{FromRequestParts, RawPathParams, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::state::AppState;
use crate::api::types::RegistryError;
use crate::domain::authz::{AccessRequest, AuthzError, Decision, Permission};
use crate::domain::user::User;
use crate::infrastructure::observability::record_decision;

/// Name of the wildcard capture holding `namespace/repository[/...]`
pub const RESOURCE_PARAM: &str = "path";

/// The caller admitted by [`authorize`], available to downstream handlers
///
/// On a route without the middleware the extractor denies the same way the
/// middleware would, using the configured status and realm.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = RegistryError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                RegistryError::unauthorized(state.deny_status, &AuthzError::MissingCredentials)
                    .with_realm(state.realm.as_ref())
            })
    }
}

/// Gate a protected registry route
///
/// Must be installed with `route_layer` on a route whose pattern ends in
/// `{*path}`. Allowed requests continue with an [`AuthenticatedUser`]
/// extension; denied ones stop here with the registry error document.
pub async fn authorize(
    State(state): State<AppState>,
    params: RawPathParams,
    mut request: Request,
    next: Next,
) -> Response {
    let access = access_request(&request, &params);
    let permission = Permission::from_method(request.method());

    let start = Instant::now();
    let decision = state.gate.evaluate(&access).await;
    record_decision(&decision, permission, start.elapsed());

    match decision {
        Decision::Allow(user) => {
            request.extensions_mut().insert(AuthenticatedUser(user));
            next.run(request).await
        }
        Decision::Deny(err) => RegistryError::unauthorized(state.deny_status, &err)
            .with_realm(state.realm.as_ref())
            .into_response(),
    }
}

fn access_request(request: &Request, params: &RawPathParams) -> AccessRequest {
    let resource = params
        .iter()
        .find(|(name, _)| *name == RESOURCE_PARAM)
        .map(|(_, value)| value.to_string())
        .unwrap_or_default();

    let access = AccessRequest::new(
        request.method().clone(),
        request.uri().path(),
        resource,
    );

    // Non-UTF-8 bytes cannot form a valid Basic payload; decoding fails later.
    match request.headers().get(header::AUTHORIZATION) {
        Some(value) => {
            access.with_authorization(String::from_utf8_lossy(value.as_bytes()).into_owned())
        }
        None => access,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::config::{AuthzConfig, DenyStatus};
    use crate::domain::store::mock::MockEntityStore;
    use crate::domain::user::MockCredentialStore;

    fn state(deny_status: DenyStatus) -> AppState {
        let config = AuthzConfig {
            deny_status,
            realm: "acme-registry".to_string(),
            ..AuthzConfig::default()
        };
        AppState::from_config(
            &config,
            Arc::new(MockCredentialStore::new()),
            Arc::new(MockEntityStore::new()),
        )
        .unwrap()
    }

    fn parts() -> Parts {
        axum::http::Request::builder()
            .uri("/v2/acme/tool/manifests/latest")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_extractor_uses_configured_deny_status() {
        let rejection = AuthenticatedUser::from_request_parts(&mut parts(), &state(DenyStatus::NotFound))
            .await
            .unwrap_err();

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[tokio::test]
    async fn test_extractor_challenges_with_configured_realm() {
        let rejection =
            AuthenticatedUser::from_request_parts(&mut parts(), &state(DenyStatus::Unauthorized))
                .await
                .unwrap_err();

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"acme-registry\""
        );
    }

    #[tokio::test]
    async fn test_extractor_returns_admitted_user() {
        let mut parts = parts();
        parts
            .extensions
            .insert(AuthenticatedUser(User::new("alice", "$argon2id$stub")));

        let AuthenticatedUser(user) =
            AuthenticatedUser::from_request_parts(&mut parts, &state(DenyStatus::Unauthorized))
                .await
                .unwrap();
        assert_eq!(user.username(), "alice");
    }
}
