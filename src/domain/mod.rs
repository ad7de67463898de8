//! Domain layer - Core business logic and entities

pub mod authz;
pub mod error;
pub mod organization;
pub mod repository;
pub mod store;
pub mod team;
pub mod user;
pub mod validation;

pub use authz::{
    AccessGate, AccessRequest, AuthorizationEngine, AuthzError, BasicCredentials,
    CredentialGate, Decision, DenyReason, LegacyResourceMatcher, Permission, ResourcePath,
};
pub use error::DomainError;
pub use organization::{Organization, OrganizationId};
pub use repository::{Repository, RepositoryKey};
pub use store::EntityStore;
pub use team::{GrantLevel, Privilege, PrivilegeId, Team, TeamId};
pub use user::{CredentialStore, User, UserStatus};
pub use validation::IdentifierError;
