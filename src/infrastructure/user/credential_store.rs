//! In-memory credential store backed by Argon2 password hashes

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::password::PasswordHasher;
use crate::domain::user::{validate_username, CredentialStore, User};
use crate::domain::DomainError;

/// In-memory implementation of CredentialStore
#[derive(Debug)]
pub struct InMemoryCredentialStore<H: PasswordHasher> {
    users: Arc<RwLock<HashMap<String, User>>>,
    hasher: Arc<H>,
}

impl<H: PasswordHasher> InMemoryCredentialStore<H> {
    /// Create an empty store
    pub fn new(hasher: Arc<H>) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            hasher,
        }
    }

    /// Register a user whose password hash is already computed
    pub async fn insert(&self, user: User) -> Result<(), DomainError> {
        validate_username(user.username()).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut users = self.users.write().await;

        if users.contains_key(user.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        users.insert(user.username().to_string(), user);
        Ok(())
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl<H: PasswordHasher + 'static> CredentialStore for InMemoryCredentialStore<H> {
    async fn authenticate(&self, username: &str, secret: &str) -> Result<Option<User>, DomainError> {
        let user = match self.users.read().await.get(username) {
            Some(user) => user.clone(),
            None => {
                debug!(username, "Unknown username");
                return Ok(None);
            }
        };

        if !user.is_active() {
            debug!(username, "User account is suspended");
            return Ok(None);
        }

        if !self.hasher.verify(secret, user.password_hash()) {
            return Ok(None);
        }

        Ok(Some(user))
    }
}
