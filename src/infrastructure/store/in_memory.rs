//! In-memory entity store implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::organization::Organization;
use crate::domain::repository::{Repository, RepositoryKey};
use crate::domain::store::EntityStore;
use crate::domain::team::{Privilege, PrivilegeId, Team, TeamId};
use crate::domain::DomainError;

/// In-memory implementation of EntityStore
///
/// Each record kind lives in its own map so concurrent evaluations only
/// contend on the kind they are reading.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    organizations: Arc<RwLock<HashMap<String, Organization>>>,
    repositories: Arc<RwLock<HashMap<RepositoryKey, Repository>>>,
    teams: Arc<RwLock<HashMap<TeamId, Team>>>,
    privileges: Arc<RwLock<HashMap<PrivilegeId, Privilege>>>,
}

impl InMemoryEntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_organization(&self, organization: Organization) -> Result<(), DomainError> {
        let mut organizations = self.organizations.write().await;
        let id = organization.id().as_str().to_string();

        if organizations.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Organization '{}' already exists",
                id
            )));
        }

        organizations.insert(id, organization);
        Ok(())
    }

    pub async fn insert_repository(&self, repository: Repository) -> Result<(), DomainError> {
        let mut repositories = self.repositories.write().await;
        let key = repository.key();

        if repositories.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Repository '{}' already exists",
                key
            )));
        }

        repositories.insert(key, repository);
        Ok(())
    }

    pub async fn insert_team(&self, team: Team) -> Result<(), DomainError> {
        let mut teams = self.teams.write().await;

        if teams.contains_key(team.id()) {
            return Err(DomainError::conflict(format!(
                "Team '{}' already exists",
                team.id()
            )));
        }

        teams.insert(team.id().clone(), team);
        Ok(())
    }

    pub async fn insert_privilege(&self, privilege: Privilege) -> Result<(), DomainError> {
        let mut privileges = self.privileges.write().await;

        if privileges.contains_key(privilege.id()) {
            return Err(DomainError::conflict(format!(
                "Privilege '{}' already exists",
                privilege.id()
            )));
        }

        privileges.insert(privilege.id().clone(), privilege);
        Ok(())
    }

    /// Record counts as (organizations, repositories, teams, privileges)
    pub async fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.organizations.read().await.len(),
            self.repositories.read().await.len(),
            self.teams.read().await.len(),
            self.privileges.read().await.len(),
        )
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn find_organization(&self, id: &str) -> Result<Option<Organization>, DomainError> {
        let organizations = self.organizations.read().await;
        Ok(organizations.get(id).cloned())
    }

    async fn find_repository(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<Repository>, DomainError> {
        let repositories = self.repositories.read().await;
        Ok(repositories.get(&RepositoryKey::new(namespace, name)).cloned())
    }

    async fn find_team(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(id).cloned())
    }

    async fn find_privilege(&self, id: &PrivilegeId) -> Result<Option<Privilege>, DomainError> {
        let privileges = self.privileges.read().await;
        Ok(privileges.get(id).cloned())
    }
}
