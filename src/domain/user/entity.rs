//! User entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::organization::OrganizationId;
use crate::domain::team::TeamId;

/// Status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// User is active and can authenticate
    #[default]
    Active,
    /// User is temporarily suspended
    Suspended,
}

impl UserStatus {
    /// Check if the user can authenticate
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A registry account
///
/// Memberships are held by identifier only; organizations and teams are
/// resolved through the entity store when a decision needs them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Login name, also the user's personal namespace
    username: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Current status of the user
    #[serde(default)]
    status: UserStatus,
    /// Organizations the user owns (full membership)
    #[serde(default)]
    organizations: Vec<OrganizationId>,
    /// Teams the user has joined, in membership order
    #[serde(default)]
    teams: Vec<TeamId>,
}

impl User {
    /// Create a new user with no memberships
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            status: UserStatus::Active,
            organizations: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Add an organization membership (builder pattern)
    pub fn with_organization(mut self, organization: OrganizationId) -> Self {
        self.organizations.push(organization);
        self
    }

    /// Join a team (builder pattern); order of calls is membership order
    pub fn with_team(mut self, team: TeamId) -> Self {
        self.teams.push(team);
        self
    }

    /// Set the status (builder pattern)
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    // Getters

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn organizations(&self) -> &[OrganizationId] {
        &self.organizations
    }

    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    /// Check if the user is active and can authenticate
    pub fn is_active(&self) -> bool {
        self.status.can_login()
    }

    /// Check if the user holds a membership in the given organization
    pub fn is_member_of(&self, organization: &OrganizationId) -> bool {
        self.organizations.iter().any(|o| o == organization)
    }
}
