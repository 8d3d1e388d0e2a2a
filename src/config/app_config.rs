use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::user::Metadata;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Records loaded into a freshly built store
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    /// Group ID -> email of the user associated with it
    #[serde(default)]
    pub groups: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `USER_STORE__*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("USER_STORE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Parse an inline TOML document, mostly for fixtures
    pub fn from_toml(contents: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.store.users.is_empty());
        assert!(config.store.groups.is_empty());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config.logging.level, "info");
        assert!(config.store.users.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [[store.users]]
            id = "u1"
            email = "a@x.com"
            password = "secret"
            metadata = { plan = "pro", seats = 3 }

            [[store.users]]
            id = "u2"
            email = "b@x.com"

            [store.groups]
            "group-1" = "a@x.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);

        assert_eq!(config.store.users.len(), 2);
        let first = &config.store.users[0];
        assert_eq!(first.id, "u1");
        assert_eq!(first.password, "secret");
        assert_eq!(first.metadata.get("plan"), Some(&json!("pro")));
        assert_eq!(first.metadata.get("seats"), Some(&json!(3)));
        assert!(config.store.users[1].password.is_empty());

        assert_eq!(
            config.store.groups.get("group-1").map(String::as_str),
            Some("a@x.com")
        );
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [logging]
            level = "info"
            format = "xml"
            "#,
        );
        assert!(result.is_err());
    }
}
