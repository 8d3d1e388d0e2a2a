//! User domain
//!
//! This module provides domain types and traits for user account storage,
//! including the user record, validation, and the repository contract.

mod entity;
mod repository;
mod validation;

pub use entity::{Metadata, PageQuery, User, UserId, UserPage};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_user_id, UserValidationError};
