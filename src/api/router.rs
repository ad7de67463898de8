use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{authorize, logging_middleware, metrics_middleware};
use super::registry;
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the gate router
///
/// Every protected prefix runs [`authorize`] before its handler; ping and
/// probe endpoints stay open.
pub fn create_router_with_state(state: AppState) -> Router {
    let protected: Router<AppState> = Router::new()
        .route("/v1/repositories/{*path}", any(registry::passthrough))
        .route("/v1/images/{*path}", any(registry::passthrough))
        .route("/v2/{*path}", any(registry::passthrough))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    Router::new()
        // Registry version discovery
        .route("/_ping", get(registry::ping_v1))
        .route("/v1/_ping", get(registry::ping_v1))
        .route("/v2/", get(registry::ping_v2))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Gate router plus the Prometheus endpoint when metrics are enabled
pub fn create_app(state: AppState, metrics: Option<PrometheusMetrics>, metrics_path: &str) -> Router {
    let router = create_router_with_state(state);

    match metrics {
        Some(m) => router.merge(create_metrics_router(m, metrics_path)),
        None => router,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{AuthzConfig, DenyStatus};
    use crate::domain::authz::BasicCredentials;
    use crate::domain::organization::{Organization, OrganizationId};
    use crate::domain::repository::{Repository, RepositoryKey};
    use crate::domain::store::mock::MockEntityStore;
    use crate::domain::team::{GrantLevel, Privilege, PrivilegeId, Team, TeamId};
    use crate::domain::user::{MockCredentialStore, User};

    fn credentials() -> MockCredentialStore {
        MockCredentialStore::new()
            .with_user(User::new("alice", "h"), "alice-pw")
            .with_user(User::new("bob", "h"), "bob-pw")
            .with_user(
                User::new("dave", "h").with_team(TeamId::new("readers").unwrap()),
                "dave-pw",
            )
    }

    fn entities() -> MockEntityStore {
        MockEntityStore::new()
            .with_organization(Organization::new(OrganizationId::new("acme").unwrap(), "Acme"))
            .with_repository(Repository::new("alice", "webapp"))
            .with_repository(Repository::new("alice", "secret").private())
            .with_repository(Repository::new("acme", "tool").private())
            .with_team(
                Team::new(
                    TeamId::new("readers").unwrap(),
                    OrganizationId::new("acme").unwrap(),
                    "Readers",
                )
                .with_privilege(PrivilegeId::new("p-tool").unwrap()),
            )
            .with_privilege(Privilege::new(
                PrivilegeId::new("p-tool").unwrap(),
                RepositoryKey::new("acme", "tool"),
                GrantLevel::ReadOnly,
            ))
    }

    fn app_with(config: &AuthzConfig, credentials: MockCredentialStore, entities: MockEntityStore) -> Router {
        let state =
            AppState::from_config(config, Arc::new(credentials), Arc::new(entities)).unwrap();
        create_router_with_state(state)
    }

    fn app() -> Router {
        app_with(&AuthzConfig::default(), credentials(), entities())
    }

    fn request(method: Method, uri: &str, auth: Option<(&str, &str)>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some((username, secret)) = auth {
            builder = builder.header(
                header::AUTHORIZATION,
                BasicCredentials::new(username, secret).to_header(),
            );
        }

        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping_endpoints_are_open() {
        for uri in ["/_ping", "/v1/_ping", "/v2/", "/health", "/live"] {
            let response = app()
                .oneshot(request(Method::GET, uri, None))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let response = app()
            .oneshot(request(Method::GET, "/v2/", None))
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("docker-distribution-api-version").unwrap(),
            "registry/2.0"
        );
    }

    #[tokio::test]
    async fn test_missing_credentials_challenge() {
        let response = app()
            .oneshot(request(Method::GET, "/v2/alice/webapp/manifests/latest", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"registry\""
        );

        let body = json_body(response).await;
        assert_eq!(body["errors"][0]["code"], "UNAUTHORIZED");
        assert_eq!(
            body["errors"][0]["message"],
            "access to the requested resource is not authorized"
        );
    }

    #[tokio::test]
    async fn test_owner_is_admitted() {
        let response = app()
            .oneshot(request(
                Method::PUT,
                "/v2/alice/secret/manifests/latest",
                Some(("alice", "alice-pw")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["username"], "alice");
        assert_eq!(body["method"], "PUT");
        assert_eq!(body["path"], "/v2/alice/secret/manifests/latest");
    }

    #[tokio::test]
    async fn test_other_users_private_repository_denied() {
        let response = app()
            .oneshot(request(
                Method::GET,
                "/v1/repositories/alice/secret/tags",
                Some(("bob", "bob-pw")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_password_denied() {
        let response = app()
            .oneshot(request(
                Method::GET,
                "/v2/alice/webapp/tags/list",
                Some(("alice", "bob-pw")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_read_only_privilege() {
        let pull = app()
            .oneshot(request(
                Method::GET,
                "/v2/acme/tool/manifests/latest",
                Some(("dave", "dave-pw")),
            ))
            .await
            .unwrap();
        assert_eq!(pull.status(), StatusCode::OK);

        let push = app()
            .oneshot(request(
                Method::PUT,
                "/v2/acme/tool/manifests/latest",
                Some(("dave", "dave-pw")),
            ))
            .await
            .unwrap();
        assert_eq!(push.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_legacy_images_skip_ownership() {
        let response = app()
            .oneshot(request(
                Method::GET,
                "/v1/images/511136ea3c5a/json",
                Some(("bob", "bob-pw")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_found_compatibility_mode() {
        let config = AuthzConfig {
            deny_status: DenyStatus::NotFound,
            ..AuthzConfig::default()
        };

        let response = app_with(&config, credentials(), entities())
            .oneshot(request(
                Method::GET,
                "/v2/alice/secret/manifests/latest",
                Some(("bob", "bob-pw")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());

        let body = json_body(response).await;
        assert_eq!(body["errors"][0]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_store_failure_denies() {
        let response = app_with(&AuthzConfig::default(), credentials(), entities().failing())
            .oneshot(request(
                Method::GET,
                "/v2/acme/tool/manifests/latest",
                Some(("alice", "alice-pw")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = json_body(response).await;
        assert!(!body.to_string().contains("Mock entity store"));
    }

    #[tokio::test]
    async fn test_readiness() {
        let response = app()
            .oneshot(request(Method::GET, "/ready", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app_with(&AuthzConfig::default(), credentials().failing(), entities())
            .oneshot(request(Method::GET, "/ready", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = json_body(response).await;
        assert_eq!(body["status"], "unhealthy");
    }
}
