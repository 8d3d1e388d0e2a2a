//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{PageQuery, User, UserId, UserPage};
use crate::domain::DomainError;

/// Persistence contract for user accounts
///
/// Implementations must report failures as typed `DomainError` kinds:
/// `Conflict` for a taken email, `NotFound` for failed lookups and
/// `UserNotFound` for mutations that target a missing user.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Persist a new user, returning its ID
    async fn save(&self, user: User) -> Result<UserId, DomainError>;

    /// Overwrite the user stored under `user.email()`
    async fn update(&self, user: User) -> Result<(), DomainError>;

    /// Overwrite the user stored under `user.email()`
    async fn update_user(&self, user: User) -> Result<(), DomainError> {
        self.update(user).await
    }

    /// Replace the credential of the user keyed by `token`
    ///
    /// `token` must already be resolved to an email by the caller.
    async fn update_password(&self, token: &str, password: &str) -> Result<(), DomainError>;

    /// Get a user by email
    async fn retrieve_by_email(&self, email: &str) -> Result<User, DomainError>;

    /// Get a user by ID
    async fn retrieve_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// List the members of a group
    async fn members(&self, group_id: &str, query: &PageQuery) -> Result<UserPage, DomainError>;
}
