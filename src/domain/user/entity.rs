//! User entity and related types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::{validate_email, validate_user_id, UserValidationError};

/// Open key-value attributes attached to a user
pub type Metadata = HashMap<String, serde_json::Value>;

/// Opaque user identifier assigned by the caller at creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User account record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Unique identifier, immutable once assigned
    id: UserId,
    /// Unique natural key used for primary lookups
    email: String,
    /// Credential secret - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
    /// Descriptive attributes, not interpreted by the store
    metadata: Metadata,
}

impl User {
    /// Create a new user with empty metadata
    ///
    /// The email is the store's primary key, so it is validated here.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into();
        validate_email(&email)?;

        Ok(Self {
            id,
            email,
            password: password.into(),
            metadata: Metadata::new(),
        })
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    // Mutators

    /// Replace the credential secret
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Set a single metadata attribute
    pub fn set_metadata_value(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.metadata.insert(key.into(), value);
    }
}

/// Pagination and filter parameters for member listings
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub offset: u64,
    pub limit: u64,
    pub metadata: Metadata,
}

impl PageQuery {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A page of users
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserPage {
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
    pub users: Vec<User>,
}

impl UserPage {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_user(id: &str, email: &str) -> User {
        User::new(UserId::new(id).unwrap(), email, "secret-password").unwrap()
    }

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(id.as_str(), "u1");
        assert_eq!(id.to_string(), "u1");
    }

    #[test]
    fn test_user_id_invalid() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("has space").is_err());
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user("u1", "a@x.com");

        assert_eq!(user.id().as_str(), "u1");
        assert_eq!(user.email(), "a@x.com");
        assert_eq!(user.password(), "secret-password");
        assert!(user.metadata().is_empty());
    }

    #[test]
    fn test_user_requires_valid_email() {
        let id = UserId::new("u1").unwrap();

        assert_eq!(
            User::new(id.clone(), "", "secret"),
            Err(UserValidationError::EmptyEmail)
        );
        assert!(User::new(id, "not-an-email", "secret").is_err());
    }

    #[test]
    fn test_user_metadata() {
        let mut metadata = Metadata::new();
        metadata.insert("role".to_string(), json!("admin"));

        let mut user = create_test_user("u1", "a@x.com").with_metadata(metadata);
        user.set_metadata_value("level", json!(3));

        assert_eq!(user.metadata().get("role"), Some(&json!("admin")));
        assert_eq!(user.metadata().get("level"), Some(&json!(3)));
    }

    #[test]
    fn test_user_set_password() {
        let mut user = create_test_user("u1", "a@x.com");
        user.set_password("rotated");
        assert_eq!(user.password(), "rotated");
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user("u1", "a@x.com");

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("secret-password"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_user_id_deserialization_is_validated() {
        let valid: UserId = serde_json::from_str(r#""u1""#).unwrap();
        assert_eq!(valid.as_str(), "u1");

        let empty: Result<UserId, _> = serde_json::from_str(r#""""#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_page_query_builder() {
        let mut metadata = Metadata::new();
        metadata.insert("team".to_string(), json!("blue"));

        let query = PageQuery::new(5, 20).with_metadata(metadata);
        assert_eq!(query.offset, 5);
        assert_eq!(query.limit, 20);
        assert_eq!(query.metadata.len(), 1);
    }

    #[test]
    fn test_default_page_is_empty() {
        let page = UserPage::default();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }
}
