//! Credential store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Verifies a username/secret pair and returns the matching account
///
/// Implementations must be safe to call from many request evaluations at once.
#[async_trait]
pub trait CredentialStore: Send + Sync + Debug {
    /// Authenticate a user
    ///
    /// Returns `Ok(None)` when the username is unknown, the secret does not
    /// match, or the account cannot log in. `Err` is reserved for store failures.
    async fn authenticate(&self, username: &str, secret: &str) -> Result<Option<User>, DomainError>;
}
