//! Registry wire types

pub mod error;

pub use error::{RegistryError, RegistryErrorCode, RegistryErrorDetail, RegistryErrorResponse};
