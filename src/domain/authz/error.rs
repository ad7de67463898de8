use thiserror::Error;

use crate::domain::DomainError;

/// Why the ownership hierarchy refused a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Repository in another user's namespace does not exist
    PersonalRepositoryMissing,
    /// Repository in another user's namespace is private
    PersonalRepositoryPrivate,
    /// Repository in an organization does not exist and caller is not a member
    NotOrganizationMember,
    /// The first matching team privilege is read-only and the request writes
    ReadOnlyPrivilege,
    /// No joined team carries a privilege for the repository
    NoMatchingPrivilege,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonalRepositoryMissing => "personal_repository_missing",
            Self::PersonalRepositoryPrivate => "personal_repository_private",
            Self::NotOrganizationMember => "not_organization_member",
            Self::ReadOnlyPrivilege => "read_only_privilege",
            Self::NoMatchingPrivilege => "no_matching_privilege",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way an access evaluation can end in Deny
///
/// The variant is kept for logs and metrics only. Callers of the registry see
/// a single unauthorized error document regardless of kind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthzError {
    #[error("Authorization header missing or not using the Basic scheme")]
    MissingCredentials,

    #[error("Malformed credentials: {0}")]
    MalformedCredentials(String),

    #[error("Authentication failed for user '{username}'")]
    AuthenticationFailed { username: String },

    #[error("Malformed resource path: '{0}'")]
    MalformedResourcePath(String),

    #[error("Store error: {0}")]
    Store(#[from] DomainError),

    #[error("Unauthorized: {0}")]
    Unauthorized(DenyReason),

    #[error("Authorization cancelled after {timeout_ms}ms")]
    Cancelled { timeout_ms: u64 },
}

impl AuthzError {
    pub fn malformed_credentials(message: impl Into<String>) -> Self {
        Self::MalformedCredentials(message.into())
    }

    pub fn authentication_failed(username: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            username: username.into(),
        }
    }

    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_credentials",
            Self::MalformedCredentials(_) => "malformed_credentials",
            Self::AuthenticationFailed { .. } => "authentication_failed",
            Self::MalformedResourcePath(_) => "malformed_resource_path",
            Self::Store(_) => "store_error",
            Self::Unauthorized(_) => "unauthorized",
            Self::Cancelled { .. } => "cancelled",
        }
    }

    /// Check if the failure happened before the caller was identified
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials
                | Self::MalformedCredentials(_)
                | Self::AuthenticationFailed { .. }
        )
    }
}
