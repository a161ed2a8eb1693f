//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use medblog_core::services::BlogSettings;
use medblog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub blog: BlogSettings,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            config.max_connections = parsed("DB_MAX_CONNECTIONS").unwrap_or(config.max_connections);
            config.min_connections = parsed("DB_MIN_CONNECTIONS").unwrap_or(config.min_connections);
            config
        });

        let defaults = BlogSettings::default();
        let blog = BlogSettings {
            site_origin: env::var("SITE_ORIGIN").unwrap_or(defaults.site_origin),
            default_author: env::var("DEFAULT_AUTHOR_NAME").unwrap_or(defaults.default_author),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT").unwrap_or(8080),
            database,
            blog,
        }
    }
}

fn parsed<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
