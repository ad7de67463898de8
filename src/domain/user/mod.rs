//! User domain
//!
//! Registry accounts, their validation rules and the credential store seam
//! used to authenticate them.

mod credential_store;
mod entity;
mod validation;

pub use credential_store::CredentialStore;
pub use entity::{User, UserStatus};
pub use validation::{validate_password, validate_username, UserValidationError};

#[cfg(test)]
pub use credential_store::mock::MockCredentialStore;
