//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthzConfig, DenyStatus, LogFormat, LoggingConfig, MetricsConfig, SeedConfig,
    ServerConfig,
};
