//! Registry endpoints served by the gate itself
//!
//! Ping endpoints are open so clients can discover the API version before
//! authenticating. Protected routes end at [`passthrough`], which only
//! reports who was admitted; image storage lives behind the gate.

use axum::{
    http::{HeaderName, HeaderValue, Method, Uri},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::middleware::AuthenticatedUser;

const V1_VERSION_HEADER: HeaderName = HeaderName::from_static("x-docker-registry-version");
const V2_VERSION_HEADER: HeaderName = HeaderName::from_static("docker-distribution-api-version");

/// `GET /_ping` and `GET /v1/_ping`
pub async fn ping_v1() -> impl IntoResponse {
    (
        [(V1_VERSION_HEADER, HeaderValue::from_static(env!("CARGO_PKG_VERSION")))],
        Json(true),
    )
}

/// `GET /v2/`
pub async fn ping_v2() -> impl IntoResponse {
    (
        [(V2_VERSION_HEADER, HeaderValue::from_static("registry/2.0"))],
        Json(serde_json::json!({})),
    )
}

#[derive(Debug, Serialize)]
pub struct AdmittedRequest {
    pub username: String,
    pub method: String,
    pub path: String,
}

/// Terminal handler for authorized registry requests
pub async fn passthrough(
    AuthenticatedUser(user): AuthenticatedUser,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    Json(AdmittedRequest {
        username: user.username().to_string(),
        method: method.to_string(),
        path: uri.path().to_string(),
    })
}
