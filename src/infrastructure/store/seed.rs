//! Seed fixtures for the in-memory stores
//!
//! A seed file is a JSON document listing every record the gate should know
//! about. User passwords are stored as Argon2 PHC strings; generate them with
//! `registry-gate hash-password`.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use super::in_memory::InMemoryEntityStore;
use crate::domain::organization::Organization;
use crate::domain::repository::Repository;
use crate::domain::team::{Privilege, Team};
use crate::domain::user::User;
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryCredentialStore, PasswordHasher};

/// Errors raised while loading a seed file
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed record: {0}")]
    Record(#[from] DomainError),
}

/// Contents of a seed file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub privileges: Vec<Privilege>,
}

/// Number of records loaded per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub organizations: usize,
    pub repositories: usize,
    pub teams: usize,
    pub privileges: usize,
}

impl SeedData {
    /// Parse a seed document
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_json(&json)
    }

    /// Insert every record into the given stores
    ///
    /// Duplicate identifiers abort the load, as does a username that is also an
    /// organization ID (a namespace has exactly one owner). Dangling membership
    /// or privilege references are only warned about; the gate denies them at
    /// decision time.
    pub async fn apply<H: PasswordHasher>(
        self,
        credentials: &InMemoryCredentialStore<H>,
        entities: &InMemoryEntityStore,
    ) -> Result<SeedSummary, SeedError> {
        self.check_namespace_owners()?;
        self.warn_dangling_references();

        let summary = SeedSummary {
            users: self.users.len(),
            organizations: self.organizations.len(),
            repositories: self.repositories.len(),
            teams: self.teams.len(),
            privileges: self.privileges.len(),
        };

        for user in self.users {
            credentials.insert(user).await?;
        }
        for organization in self.organizations {
            entities.insert_organization(organization).await?;
        }
        for repository in self.repositories {
            entities.insert_repository(repository).await?;
        }
        for team in self.teams {
            entities.insert_team(team).await?;
        }
        for privilege in self.privileges {
            entities.insert_privilege(privilege).await?;
        }

        let (organizations, repositories, teams, privileges) = entities.counts().await;
        info!(
            users = summary.users,
            organizations = summary.organizations,
            repositories = summary.repositories,
            teams = summary.teams,
            privileges = summary.privileges,
            total_users = credentials.len().await,
            total_organizations = organizations,
            total_repositories = repositories,
            total_teams = teams,
            total_privileges = privileges,
            "Seed data loaded"
        );

        Ok(summary)
    }

    fn check_namespace_owners(&self) -> Result<(), DomainError> {
        let organizations: HashSet<&str> =
            self.organizations.iter().map(|o| o.id().as_str()).collect();

        match self
            .users
            .iter()
            .find(|u| organizations.contains(u.username()))
        {
            Some(user) => Err(DomainError::conflict(format!(
                "Namespace '{}' is claimed by both a user and an organization",
                user.username()
            ))),
            None => Ok(()),
        }
    }

    fn warn_dangling_references(&self) {
        let teams: HashSet<&str> = self.teams.iter().map(|t| t.id().as_str()).collect();
        let privileges: HashSet<&str> = self.privileges.iter().map(|p| p.id().as_str()).collect();
        let organizations: HashSet<&str> =
            self.organizations.iter().map(|o| o.id().as_str()).collect();

        for user in &self.users {
            for team in user.teams().iter().filter(|t| !teams.contains(t.as_str())) {
                warn!(username = %user.username(), team = %team, "User joined an unknown team");
            }
            for org in user
                .organizations()
                .iter()
                .filter(|o| !organizations.contains(o.as_str()))
            {
                warn!(username = %user.username(), organization = %org, "User belongs to an unknown organization");
            }
        }

        for team in &self.teams {
            for privilege in team
                .privileges()
                .iter()
                .filter(|p| !privileges.contains(p.as_str()))
            {
                warn!(team = %team.id(), privilege = %privilege, "Team references an unknown privilege");
            }
        }
    }
}
