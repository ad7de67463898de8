//! Identifier validation shared by organizations, teams and privileges

use thiserror::Error;

/// Errors that can occur while validating a record identifier
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentifierError {
    #[error("{0} ID cannot be empty")]
    Empty(&'static str),

    #[error("{0} ID cannot exceed {1} characters")]
    TooLong(&'static str, usize),

    #[error("{0} ID contains invalid character: '{1}'. Only alphanumeric characters, underscores, and hyphens are allowed")]
    InvalidCharacter(&'static str, char),

    #[error("{0} ID must start and end with a letter or number")]
    InvalidFormat(&'static str),
}

const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Validate a record identifier
///
/// Rules:
/// - Cannot be empty
/// - Maximum 64 characters (a hyphenated UUID fits)
/// - Only alphanumeric characters, underscores, and hyphens
/// - Must start and end with alphanumeric
pub fn validate_identifier(kind: &'static str, id: &str) -> Result<(), IdentifierError> {
    if id.is_empty() {
        return Err(IdentifierError::Empty(kind));
    }

    if id.len() > MAX_IDENTIFIER_LENGTH {
        return Err(IdentifierError::TooLong(kind, MAX_IDENTIFIER_LENGTH));
    }

    if let Some(c) = id
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(IdentifierError::InvalidCharacter(kind, c));
    }

    let alnum = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());

    if !alnum(id.chars().next()) || !alnum(id.chars().last()) {
        return Err(IdentifierError::InvalidFormat(kind));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Team", "core-team").is_ok());
        assert!(validate_identifier("Team", "team_42").is_ok());
        assert!(validate_identifier("Privilege", "4f6c8f0e-5b1a-4a57-9d36-8d1b2c3e4f50").is_ok());
    }

    #[test]
    fn test_empty_identifier() {
        assert_eq!(
            validate_identifier("Team", ""),
            Err(IdentifierError::Empty("Team"))
        );
    }

    #[test]
    fn test_identifier_too_long() {
        let id = "a".repeat(65);
        assert_eq!(
            validate_identifier("Organization", &id),
            Err(IdentifierError::TooLong("Organization", 64))
        );
    }

    #[test]
    fn test_identifier_invalid_character() {
        assert_eq!(
            validate_identifier("Team", "core/team"),
            Err(IdentifierError::InvalidCharacter("Team", '/'))
        );
    }

    #[test]
    fn test_identifier_invalid_format() {
        assert!(validate_identifier("Team", "-core").is_err());
        assert!(validate_identifier("Team", "core_").is_err());
    }

    #[test]
    fn test_error_message_names_kind() {
        let err = validate_identifier("Privilege", "").unwrap_err();
        assert_eq!(err.to_string(), "Privilege ID cannot be empty");
    }
}
