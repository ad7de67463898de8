//! Account rules
//!
//! A username is also a personal namespace, so it follows the identifier
//! rules used for organizations. That keeps `/` and `:` out of usernames,
//! which would otherwise clash with resource paths and Basic credentials.

use thiserror::Error;

use crate::domain::validation::{validate_identifier, IdentifierError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error(transparent)]
    Username(#[from] IdentifierError),

    #[error("Username must be at least {0} characters")]
    UsernameTooShort(usize),

    #[error("Password must be between {0} and {1} characters")]
    PasswordLength(usize, usize),
}

const MIN_USERNAME_LENGTH: usize = 3;
const PASSWORD_LENGTH: (usize, usize) = (8, 128);

pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    validate_identifier("Username", username)?;

    if username.len() < MIN_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooShort(MIN_USERNAME_LENGTH));
    }

    Ok(())
}

/// Length policy for new passwords; stored hashes are never re-checked
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let (min, max) = PASSWORD_LENGTH;
    let len = password.chars().count();

    if len < min || len > max {
        return Err(UserValidationError::PasswordLength(min, max));
    }

    Ok(())
}
