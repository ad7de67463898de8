//! Entity store trait
//!
//! Read-only lookups over organizations, repositories, teams and privileges.
//! `Ok(None)` means the record does not exist; `Err` means the lookup itself
//! failed.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::organization::Organization;
use crate::domain::repository::Repository;
use crate::domain::team::{Privilege, PrivilegeId, Team, TeamId};
use crate::domain::DomainError;

/// Lookup interface consumed by the authorization engine
///
/// Implementations must be safe to call from many request evaluations at once.
#[async_trait]
pub trait EntityStore: Send + Sync + Debug {
    /// Find an organization by identifier (the namespace it owns)
    async fn find_organization(&self, id: &str) -> Result<Option<Organization>, DomainError>;

    /// Find a repository by its composite key
    async fn find_repository(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<Repository>, DomainError>;

    /// Find a team by identifier
    async fn find_team(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Find a privilege by identifier
    async fn find_privilege(&self, id: &PrivilegeId) -> Result<Option<Privilege>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    /// One lookup performed against the mock
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum Lookup {
        Organization(String),
        Repository(String, String),
        Team(String),
        Privilege(String),
    }

    /// Mock entity store that records every lookup and can fail selectively
    #[derive(Debug, Default)]
    pub struct MockEntityStore {
        organizations: HashMap<String, Organization>,
        repositories: HashMap<(String, String), Repository>,
        teams: HashMap<String, Team>,
        privileges: HashMap<String, Privilege>,
        failing: HashSet<Lookup>,
        fail_all: bool,
        lookups: Mutex<Vec<Lookup>>,
    }

    impl MockEntityStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_organization(mut self, organization: Organization) -> Self {
            self.organizations
                .insert(organization.id().as_str().to_string(), organization);
            self
        }

        pub fn with_repository(mut self, repository: Repository) -> Self {
            self.repositories.insert(
                (
                    repository.namespace().to_string(),
                    repository.name().to_string(),
                ),
                repository,
            );
            self
        }

        pub fn with_team(mut self, team: Team) -> Self {
            self.teams.insert(team.id().as_str().to_string(), team);
            self
        }

        pub fn with_privilege(mut self, privilege: Privilege) -> Self {
            self.privileges
                .insert(privilege.id().as_str().to_string(), privilege);
            self
        }

        /// Make one specific lookup fail with a storage error
        pub fn failing_on(mut self, lookup: Lookup) -> Self {
            self.failing.insert(lookup);
            self
        }

        /// Make every lookup fail with a storage error
        pub fn failing(mut self) -> Self {
            self.fail_all = true;
            self
        }

        /// Lookups performed so far, in order
        pub fn lookups(&self) -> Vec<Lookup> {
            self.lookups.lock().unwrap().clone()
        }

        fn record(&self, lookup: Lookup) -> Result<(), DomainError> {
            let fail = self.fail_all || self.failing.contains(&lookup);
            self.lookups.lock().unwrap().push(lookup);

            if fail {
                return Err(DomainError::storage("Mock entity store configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl EntityStore for MockEntityStore {
        async fn find_organization(
            &self,
            id: &str,
        ) -> Result<Option<Organization>, DomainError> {
            self.record(Lookup::Organization(id.to_string()))?;
            Ok(self.organizations.get(id).cloned())
        }

        async fn find_repository(
            &self,
            namespace: &str,
            name: &str,
        ) -> Result<Option<Repository>, DomainError> {
            self.record(Lookup::Repository(namespace.to_string(), name.to_string()))?;
            Ok(self
                .repositories
                .get(&(namespace.to_string(), name.to_string()))
                .cloned())
        }

        async fn find_team(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
            self.record(Lookup::Team(id.as_str().to_string()))?;
            Ok(self.teams.get(id.as_str()).cloned())
        }

        async fn find_privilege(
            &self,
            id: &PrivilegeId,
        ) -> Result<Option<Privilege>, DomainError> {
            self.record(Lookup::Privilege(id.as_str().to_string()))?;
            Ok(self.privileges.get(id.as_str()).cloned())
        }
    }
}
