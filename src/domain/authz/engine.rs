use std::sync::Arc;

use tracing::debug;

use super::error::{AuthzError, DenyReason};
use super::path::ResourcePath;
use super::permission::Permission;
use crate::domain::organization::Organization;
use crate::domain::store::EntityStore;
use crate::domain::user::User;
use crate::domain::DomainError;

/// Walks the namespace ownership hierarchy for an authenticated user
///
/// Rules are tried in order and the first one that applies decides:
///
/// 1. A user always owns their personal namespace.
/// 2. Another user's namespace exposes only its public repositories.
/// 3. In an organization namespace, members may create repositories that do
///    not exist yet, anyone may read public repositories, and everything else
///    is decided by the first team privilege that targets the repository.
///
/// Every store failure ends the evaluation with a Deny. Lookups happen strictly
/// in rule order; nothing is prefetched or cached between calls.
#[derive(Debug, Clone)]
pub struct AuthorizationEngine {
    store: Arc<dyn EntityStore>,
}

impl AuthorizationEngine {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Decide whether `user` may perform `permission` on `resource`
    pub async fn authorize(
        &self,
        user: &User,
        resource: &ResourcePath,
        permission: Permission,
    ) -> Result<(), AuthzError> {
        if user.username() == resource.namespace() {
            debug!(namespace = %resource.namespace(), "Caller owns the namespace");
            return Ok(());
        }

        match self.store.find_organization(resource.namespace()).await? {
            Some(organization) => {
                self.authorize_organization(user, &organization, resource, permission)
                    .await
            }
            None => self.authorize_personal(resource).await,
        }
    }

    /// Another user's namespace: only public repositories are reachable
    async fn authorize_personal(&self, resource: &ResourcePath) -> Result<(), AuthzError> {
        debug!(resource = %resource, "Checking repository visibility in personal namespace");

        let repository = self
            .store
            .find_repository(resource.namespace(), resource.repository())
            .await?
            .ok_or(AuthzError::Unauthorized(DenyReason::PersonalRepositoryMissing))?;

        // Public personal repositories accept writes from any authenticated user.
        if repository.is_private() {
            return Err(AuthzError::Unauthorized(DenyReason::PersonalRepositoryPrivate));
        }

        Ok(())
    }

    async fn authorize_organization(
        &self,
        user: &User,
        organization: &Organization,
        resource: &ResourcePath,
        permission: Permission,
    ) -> Result<(), AuthzError> {
        let is_member = user.is_member_of(organization.id());

        debug!(
            organization = %organization.id(),
            is_member,
            permission = %permission,
            "Checking organization repository access"
        );

        let Some(repository) = self
            .store
            .find_repository(resource.namespace(), resource.repository())
            .await?
        else {
            return if is_member {
                Ok(())
            } else {
                Err(AuthzError::Unauthorized(DenyReason::NotOrganizationMember))
            };
        };

        if !repository.is_private() && permission == Permission::Read {
            return Ok(());
        }

        let target = repository.key();

        for team_id in user.teams() {
            let team = self
                .store
                .find_team(team_id)
                .await?
                .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", team_id)))?;

            for privilege_id in team.privileges() {
                let privilege = self.store.find_privilege(privilege_id).await?.ok_or_else(|| {
                    DomainError::not_found(format!("Privilege '{}' not found", privilege_id))
                })?;

                if !privilege.targets(&target) {
                    continue;
                }

                // First match is authoritative, even if a later team grants more.
                debug!(
                    team = %team_id,
                    privilege = %privilege_id,
                    grant = %privilege.grant(),
                    "Matched team privilege"
                );

                return if privilege.grant().permits(permission) {
                    Ok(())
                } else {
                    Err(AuthzError::Unauthorized(DenyReason::ReadOnlyPrivilege))
                };
            }
        }

        Err(AuthzError::Unauthorized(DenyReason::NoMatchingPrivilege))
    }
}
