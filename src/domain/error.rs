use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A unique key (email or id) is already taken
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// A lookup found no matching record
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A mutation targeted a user that does not exist
    #[error("User not found: {message}")]
    UserNotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::UserNotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True for uniqueness violations
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// True for both not-found flavours
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::UserNotFound { .. })
    }
}
