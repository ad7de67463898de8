//! User infrastructure module
//!
//! Password hashing with Argon2 and an in-memory credential store that
//! verifies registry logins against stored hashes.

mod credential_store;
mod password;

pub use credential_store::InMemoryCredentialStore;
pub use password::{Argon2Hasher, PasswordHasher};
