//! Domain layer - Core entities and contracts

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    validate_email, validate_user_id, Metadata, PageQuery, User, UserId, UserPage,
    UserRepository, UserValidationError,
};
