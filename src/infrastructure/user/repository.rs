//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::user::{PageQuery, User, UserId, UserPage, UserRepository};
use crate::domain::DomainError;

/// Lookup indices guarded together so they never drift apart
#[derive(Debug, Default)]
struct UserIndex {
    by_email: HashMap<String, User>,
    by_id: HashMap<UserId, User>,
    /// Group ID -> associated user; only used as an existence check
    by_group: HashMap<String, UserId>,
}

impl UserIndex {
    fn insert(&mut self, user: User) {
        self.by_id.insert(user.id().clone(), user.clone());
        self.by_email.insert(user.email().to_string(), user);
    }
}

/// In-memory implementation of UserRepository
///
/// Every operation, reads included, holds one store-wide lock for its whole
/// duration. Once the lock is acquired no further await point is reached, so
/// an operation that has started always runs to completion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<Mutex<UserIndex>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    ///
    /// The first user seen for a given email or ID wins; later duplicates are skipped.
    pub fn with_users(users: Vec<User>) -> Self {
        let mut index = UserIndex::default();

        for user in users {
            if index.by_email.contains_key(user.email()) || index.by_id.contains_key(user.id()) {
                continue;
            }
            index.insert(user);
        }

        Self {
            inner: Arc::new(Mutex::new(index)),
        }
    }

    /// Associate a stored user with a group so `members` finds it
    pub async fn assign_group(
        &self,
        group_id: impl Into<String>,
        id: &UserId,
    ) -> Result<(), DomainError> {
        let mut index = self.inner.lock().await;

        if !index.by_id.contains_key(id) {
            return Err(DomainError::not_found(format!(
                "User with ID '{}' not found",
                id
            )));
        }

        let group_id = group_id.into();
        debug!(group_id = %group_id, user_id = %id, "Assigned user to group");
        index.by_group.insert(group_id, id.clone());

        Ok(())
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.lock().await.by_email.len()
    }

    /// True when no user has been stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<UserId, DomainError> {
        let mut index = self.inner.lock().await;

        if index.by_email.contains_key(user.email()) {
            return Err(DomainError::conflict(format!(
                "User with email '{}' already exists",
                user.email()
            )));
        }

        if index.by_id.contains_key(user.id()) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                user.id()
            )));
        }

        let id = user.id().clone();
        index.insert(user);
        debug!(user_id = %id, "Saved user");

        Ok(id)
    }

    async fn update(&self, user: User) -> Result<(), DomainError> {
        let mut index = self.inner.lock().await;

        let Some(existing) = index.by_email.get(user.email()) else {
            return Err(DomainError::user_not_found(format!(
                "User with email '{}' not found",
                user.email()
            )));
        };

        // IDs are fixed at creation; a record claiming another ID is not this user
        if existing.id() != user.id() {
            return Err(DomainError::user_not_found(format!(
                "User with email '{}' and ID '{}' not found",
                user.email(),
                user.id()
            )));
        }

        debug!(user_id = %user.id(), "Updated user");
        index.insert(user);

        Ok(())
    }

    async fn update_password(&self, token: &str, _password: &str) -> Result<(), DomainError> {
        let index = self.inner.lock().await;

        if !index.by_email.contains_key(token) {
            return Err(DomainError::user_not_found(format!(
                "User with email '{}' not found",
                token
            )));
        }

        Ok(())
    }

    async fn retrieve_by_email(&self, email: &str) -> Result<User, DomainError> {
        let index = self.inner.lock().await;

        index
            .by_email
            .get(email)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("User with email '{}' not found", email)))
    }

    async fn retrieve_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let index = self.inner.lock().await;

        index
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("User with ID '{}' not found", id)))
    }

    async fn members(&self, group_id: &str, _query: &PageQuery) -> Result<UserPage, DomainError> {
        let index = self.inner.lock().await;

        if !index.by_group.contains_key(group_id) {
            return Err(DomainError::not_found(format!(
                "Group '{}' has no members",
                group_id
            )));
        }

        Ok(UserPage::default())
    }
}
