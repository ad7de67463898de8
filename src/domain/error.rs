use thiserror::Error;

/// Errors raised by stores and by record validation
///
/// `NotFound` is only produced where a missing record is itself a failure
/// (a dangling team or privilege reference); plain lookups return `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("Record not found: {message}")]
    NotFound { message: String },

    #[error("Invalid record: {message}")]
    Validation { message: String },

    #[error("Duplicate record: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Store unavailable: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_reference_message() {
        let error = DomainError::not_found("Team 'core' not found");
        assert_eq!(error.to_string(), "Record not found: Team 'core' not found");
    }

    #[test]
    fn test_store_unavailable_message() {
        let error = DomainError::storage("connection reset");
        assert_eq!(error.to_string(), "Store unavailable: connection reset");
    }

    #[test]
    fn test_duplicate_record_message() {
        let error = DomainError::conflict("Organization 'acme' already exists");
        assert_eq!(
            error.to_string(),
            "Duplicate record: Organization 'acme' already exists"
        );
    }
}
