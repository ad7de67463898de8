//! Registry-compatible error documents

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::authz::AuthzError;

/// Error codes understood by registry clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistryErrorCode {
    Unauthorized,
}

impl RegistryErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "access to the requested resource is not authorized",
        }
    }
}

/// `{"errors": [...]}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct RegistryErrorResponse {
    pub errors: Vec<RegistryErrorDetail>,
}

/// One entry of the `errors` array
#[derive(Debug, Clone, Serialize)]
pub struct RegistryErrorDetail {
    pub code: RegistryErrorCode,
    pub message: String,
    pub detail: Option<String>,
}

/// Denial rendered for a registry client
///
/// Every deny carries the same code and message; `detail` only says whether
/// the client should retry with credentials, never which check failed.
#[derive(Debug)]
pub struct RegistryError {
    pub status: StatusCode,
    pub realm: Option<String>,
    pub response: RegistryErrorResponse,
}

impl RegistryError {
    pub fn new(status: StatusCode, code: RegistryErrorCode) -> Self {
        Self {
            status,
            realm: None,
            response: RegistryErrorResponse {
                errors: vec![RegistryErrorDetail {
                    code,
                    message: code.message().to_string(),
                    detail: None,
                }],
            },
        }
    }

    /// Denial for an evaluated request
    pub fn unauthorized(status: StatusCode, err: &AuthzError) -> Self {
        let detail = if err.is_authentication_failure() {
            Some("basic authentication required".to_string())
        } else {
            None
        };

        Self::new(status, RegistryErrorCode::Unauthorized).with_detail(detail)
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        if let Some(entry) = self.response.errors.first_mut() {
            entry.detail = detail;
        }
        self
    }

    /// Advertise a Basic challenge for this realm when the status is 401
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    fn challenge(&self) -> Option<HeaderValue> {
        if self.status != StatusCode::UNAUTHORIZED {
            return None;
        }

        let realm = self.realm.as_deref()?;
        HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm.replace('"', ""))).ok()
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let challenge = self.challenge();
        let mut response = (self.status, Json(self.response)).into_response();

        if let Some(value) = challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, value);
        }

        response
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.response.errors.first() {
            Some(entry) => write!(f, "{}: {}", self.status.as_u16(), entry.message),
            None => write!(f, "{}", self.status.as_u16()),
        }
    }
}

impl std::error::Error for RegistryError {}
