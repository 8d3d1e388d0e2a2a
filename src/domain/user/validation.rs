//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID cannot contain whitespace")]
    IdContainsWhitespace,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email '{0}' must contain a single '@' separating local part and domain")]
    MalformedEmail(String),
}

/// Validate a user ID
///
/// IDs are opaque to the store, so the only rules are that the value is
/// non-empty and carries no whitespace.
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.chars().any(char::is_whitespace) {
        return Err(UserValidationError::IdContainsWhitespace);
    }

    Ok(())
}

/// Validate an email used as the primary lookup key
///
/// Rules:
/// - Cannot be empty
/// - Exactly one '@' with a non-empty part on each side
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        });

    if !well_formed {
        return Err(UserValidationError::MalformedEmail(email.to_string()));
    }

    Ok(())
}
