//! Team entity and related types

use serde::{Deserialize, Serialize};

use super::privilege::PrivilegeId;
use crate::domain::organization::OrganizationId;
use crate::domain::validation::{validate_identifier, IdentifierError};

/// Team identifier - alphanumeric, underscores and hyphens, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        validate_identifier("Team", &id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// Owning organization
    organization: OrganizationId,
    /// Display name
    name: String,
    /// Privilege references in stored order
    #[serde(default)]
    privileges: Vec<PrivilegeId>,
}

impl Team {
    /// Create a new team with no privileges
    pub fn new(id: TeamId, organization: OrganizationId, name: impl Into<String>) -> Self {
        Self {
            id,
            organization,
            name: name.into(),
            privileges: Vec::new(),
        }
    }

    /// Append a privilege reference (builder pattern)
    pub fn with_privilege(mut self, privilege: PrivilegeId) -> Self {
        self.privileges.push(privilege);
        self
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn organization(&self) -> &OrganizationId {
        &self.organization
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn privileges(&self) -> &[PrivilegeId] {
        &self.privileges
    }
}
