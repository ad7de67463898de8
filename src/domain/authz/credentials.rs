use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use super::error::AuthzError;
use crate::domain::user::{CredentialStore, User};

const BASIC_SCHEME: &str = "Basic";

/// Username and secret decoded from a Basic authorization header
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    secret: String,
}

impl BasicCredentials {
    /// Decode an `Authorization` header value of the form `Basic base64(user:secret)`
    ///
    /// An absent header or another scheme is `MissingCredentials`; a Basic
    /// header whose payload does not decode to `user:secret` is
    /// `MalformedCredentials`.
    pub fn from_header(header: Option<&str>) -> Result<Self, AuthzError> {
        let header = header.map(str::trim).unwrap_or_default();
        let (scheme, payload) = header.split_once(char::is_whitespace).unwrap_or((header, ""));

        if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
            return Err(AuthzError::MissingCredentials);
        }

        let payload = payload.trim();
        if payload.is_empty() {
            return Err(AuthzError::malformed_credentials("empty Basic payload"));
        }

        let decoded = STANDARD
            .decode(payload)
            .map_err(|e| AuthzError::malformed_credentials(format!("invalid base64: {}", e)))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| AuthzError::malformed_credentials("credentials are not valid UTF-8"))?;

        let (username, secret) = decoded
            .split_once(':')
            .ok_or_else(|| AuthzError::malformed_credentials("missing ':' separator"))?;

        if username.is_empty() {
            return Err(AuthzError::malformed_credentials("empty username"));
        }

        Ok(Self {
            username: username.to_string(),
            secret: secret.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Encode as an `Authorization` header value
    pub fn to_header(&self) -> String {
        format!(
            "{} {}",
            BASIC_SCHEME,
            STANDARD.encode(format!("{}:{}", self.username, self.secret))
        )
    }

    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Turns an authorization header into an authenticated user
#[derive(Debug, Clone)]
pub struct CredentialGate {
    store: Arc<dyn CredentialStore>,
}

impl CredentialGate {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Authenticate the caller; the store is only consulted for well-formed headers
    pub async fn authenticate(&self, header: Option<&str>) -> Result<User, AuthzError> {
        let credentials = BasicCredentials::from_header(header)?;

        debug!(username = %credentials.username(), "Authenticating registry credentials");

        self.store
            .authenticate(credentials.username(), credentials.secret())
            .await?
            .ok_or_else(|| AuthzError::authentication_failed(credentials.username()))
    }
}
