//! Registry Gate
//!
//! Repository-scoped authorization in front of a container image registry:
//! - HTTP Basic authentication against a credential store
//! - Ownership checks for personal and organization namespaces
//! - Team privileges (read-only or read-write) per repository
//! - Registry-compatible error documents on denial

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;

use api::state::AppState;
use infrastructure::store::{InMemoryEntityStore, SeedData};
use infrastructure::user::{Argon2Hasher, InMemoryCredentialStore};

/// Stores backing one gate instance
pub struct Stores {
    pub credentials: Arc<InMemoryCredentialStore<Argon2Hasher>>,
    pub entities: Arc<InMemoryEntityStore>,
}

/// Create empty stores and fill them from the seed file, if any
pub async fn create_stores(seed_path: Option<&str>) -> anyhow::Result<Stores> {
    let stores = Stores {
        credentials: Arc::new(InMemoryCredentialStore::new(Arc::new(Argon2Hasher::new()))),
        entities: Arc::new(InMemoryEntityStore::new()),
    };

    match seed_path {
        Some(path) => {
            let seed = SeedData::load(path)
                .await
                .with_context(|| format!("loading seed data from {}", path))?;
            seed.apply(stores.credentials.as_ref(), stores.entities.as_ref())
                .await?;
        }
        None => tracing::warn!("No seed file configured"),
    }

    if stores.credentials.is_empty().await {
        tracing::warn!("No users loaded; every protected request will be denied");
    }

    Ok(stores)
}

/// Build application state from configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let stores = create_stores(config.seed.path.as_deref()).await?;

    AppState::from_config(&config.authz, stores.credentials, stores.entities)
        .context("invalid authz.legacy_image_pattern")
}
