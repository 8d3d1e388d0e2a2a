//! User Store
//!
//! An in-memory, concurrency-safe implementation of the user persistence
//! contract, intended as a stand-in for a durable database in tests and
//! local development. It enforces:
//! - Email uniqueness with typed conflict errors
//! - Consistent lookups by email and by ID
//! - Distinct not-found kinds for lookups and mutations

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, User, UserId, UserRepository};
pub use infrastructure::user::InMemoryUserRepository;

use tracing::info;

/// Build a store seeded from the `store` section of the configuration
///
/// Seeds go through the regular `save` path, so duplicated emails surface as
/// `Conflict`. Group entries reference users by email.
pub async fn create_user_repository(
    config: &AppConfig,
) -> Result<InMemoryUserRepository, DomainError> {
    let repository = InMemoryUserRepository::new();

    for seed in &config.store.users {
        let id = UserId::new(&seed.id).map_err(|e| DomainError::validation(e.to_string()))?;
        let user = User::new(id, &seed.email, &seed.password)
            .map_err(|e| DomainError::validation(e.to_string()))?
            .with_metadata(seed.metadata.clone());

        repository.save(user).await?;
    }

    for (group_id, email) in &config.store.groups {
        let user = repository.retrieve_by_email(email).await?;
        repository.assign_group(group_id.as_str(), user.id()).await?;
    }

    info!(
        users = config.store.users.len(),
        groups = config.store.groups.len(),
        "User store initialized"
    );

    Ok(repository)
}
