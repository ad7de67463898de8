use super::error::AuthzError;
use crate::domain::user::User;

/// Outcome of one access evaluation
#[derive(Debug, Clone)]
pub enum Decision {
    /// The request may proceed as this user
    Allow(User),
    /// The request must stop here
    Deny(AuthzError),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }

    /// `"allow"` or `"deny"`
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Allow(_) => "allow",
            Self::Deny(_) => "deny",
        }
    }

    /// Internal deny kind, if any
    pub fn deny_kind(&self) -> Option<&'static str> {
        match self {
            Self::Allow(_) => None,
            Self::Deny(err) => Some(err.kind()),
        }
    }
}

impl From<Result<User, AuthzError>> for Decision {
    fn from(result: Result<User, AuthzError>) -> Self {
        match result {
            Ok(user) => Self::Allow(user),
            Err(err) => Self::Deny(err),
        }
    }
}
