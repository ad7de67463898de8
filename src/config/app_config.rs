use std::time::Duration;

use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::authz::{DEFAULT_EVALUATION_TIMEOUT, DEFAULT_LEGACY_IMAGE_PATTERN};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub authz: AuthzConfig,
    pub metrics: MetricsConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Authorization gate settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthzConfig {
    /// Status returned with every denial
    pub deny_status: DenyStatus,
    /// Upper bound for a single evaluation, including store lookups
    pub evaluation_timeout_ms: u64,
    /// Request paths matching this pattern skip the ownership check
    pub legacy_image_pattern: String,
    /// Realm advertised in `WWW-Authenticate`
    pub realm: String,
}

/// Status code used for denied requests
///
/// `not_found` keeps older registry clients working; they expect a denied
/// pull to look like a missing image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyStatus {
    #[default]
    #[serde(alias = "401")]
    Unauthorized,
    #[serde(alias = "404")]
    NotFound,
}

impl DenyStatus {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

/// Where to load users and registry records from at startup
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            deny_status: DenyStatus::default(),
            evaluation_timeout_ms: DEFAULT_EVALUATION_TIMEOUT.as_millis() as u64,
            legacy_image_pattern: DEFAULT_LEGACY_IMAGE_PATTERN.to_string(),
            realm: "registry".to_string(),
        }
    }
}

impl AuthzConfig {
    pub fn evaluation_timeout(&self) -> Duration {
        Duration::from_millis(self.evaluation_timeout_ms)
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
