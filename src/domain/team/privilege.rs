//! Team privilege entity

use serde::{Deserialize, Serialize};

use crate::domain::authz::Permission;
use crate::domain::repository::RepositoryKey;
use crate::domain::validation::{validate_identifier, IdentifierError};

/// Privilege identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrivilegeId(String);

impl PrivilegeId {
    /// Create a new PrivilegeId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        validate_identifier("Privilege", &id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PrivilegeId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PrivilegeId> for String {
    fn from(id: PrivilegeId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PrivilegeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access level carried by a privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantLevel {
    /// Pull and push
    ReadWrite,
    /// Pull only
    ReadOnly,
}

impl GrantLevel {
    /// Check if this grant covers the requested permission
    pub fn permits(&self, permission: Permission) -> bool {
        match self {
            Self::ReadWrite => true,
            Self::ReadOnly => permission == Permission::Read,
        }
    }
}

impl std::fmt::Display for GrantLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadWrite => write!(f, "read_write"),
            Self::ReadOnly => write!(f, "read_only"),
        }
    }
}

/// Grants a team access to one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    id: PrivilegeId,
    repository: RepositoryKey,
    grant: GrantLevel,
}

impl Privilege {
    pub fn new(id: PrivilegeId, repository: RepositoryKey, grant: GrantLevel) -> Self {
        Self {
            id,
            repository,
            grant,
        }
    }

    pub fn id(&self) -> &PrivilegeId {
        &self.id
    }

    pub fn repository(&self) -> &RepositoryKey {
        &self.repository
    }

    pub fn grant(&self) -> GrantLevel {
        self.grant
    }

    /// Check if this privilege targets the given repository
    pub fn targets(&self, repository: &RepositoryKey) -> bool {
        &self.repository == repository
    }
}
