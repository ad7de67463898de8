//! Image repository entity

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors parsing a `namespace/name` repository reference
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryKeyError {
    #[error("Repository reference '{0}' must have the form 'namespace/name'")]
    InvalidFormat(String),
}

/// Composite key of a repository
///
/// Serialized as `namespace/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryKey {
    namespace: String,
    name: String,
}

impl RepositoryKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for RepositoryKey {
    type Error = RepositoryKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once('/') {
            Some((namespace, name))
                if !namespace.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(namespace, name))
            }
            _ => Err(RepositoryKeyError::InvalidFormat(value)),
        }
    }
}

impl From<RepositoryKey> for String {
    fn from(key: RepositoryKey) -> Self {
        key.to_string()
    }
}

impl std::fmt::Display for RepositoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// An image repository; may not exist yet before its first push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    namespace: String,
    name: String,
    #[serde(default)]
    private: bool,
}

impl Repository {
    /// Create a public repository
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            private: false,
        }
    }

    /// Mark the repository private (builder pattern)
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    pub fn key(&self) -> RepositoryKey {
        RepositoryKey::new(&self.namespace, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_defaults_to_public() {
        let repo = Repository::new("alice", "webapp");
        assert!(!repo.is_private());
        assert!(Repository::new("alice", "secrets").private().is_private());
    }

    #[test]
    fn test_repository_key() {
        let repo = Repository::new("acme", "tool");
        assert_eq!(repo.key(), RepositoryKey::new("acme", "tool"));
        assert_eq!(repo.key().to_string(), "acme/tool");
    }

    #[test]
    fn test_repository_key_parse() {
        let key: RepositoryKey = serde_json::from_str(r#""acme/tool""#).unwrap();
        assert_eq!(key.namespace(), "acme");
        assert_eq!(key.name(), "tool");
    }

    #[test]
    fn test_repository_key_parse_rejects_malformed() {
        assert!(RepositoryKey::try_from("acme".to_string()).is_err());
        assert!(RepositoryKey::try_from("/tool".to_string()).is_err());
        assert!(RepositoryKey::try_from("acme/".to_string()).is_err());
        assert!(RepositoryKey::try_from("acme/tool/extra".to_string()).is_err());
    }

    #[test]
    fn test_repository_deserialize_private_flag() {
        let repo: Repository =
            serde_json::from_str(r#"{"namespace": "alice", "name": "vault", "private": true}"#)
                .unwrap();
        assert!(repo.is_private());
    }
}
