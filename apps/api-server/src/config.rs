//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use cms_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `DATABASE_URL` is unset; the server then runs on in-memory storage.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| lookup(key).and_then(|raw| parse::<u64>(&raw));

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let mut config = DatabaseConfig::new(url);
                if let Some(max) = lookup("DB_MAX_CONNECTIONS").and_then(|raw| parse(&raw)) {
                    config.max_connections = max;
                }
                if let Some(min) = lookup("DB_MIN_CONNECTIONS").and_then(|raw| parse(&raw)) {
                    config.min_connections = min;
                }
                if let Some(secs) = number("DB_CONNECT_TIMEOUT_SECS") {
                    config.connect_timeout = Duration::from_secs(secs);
                }
                if let Some(secs) = number("DB_ACQUIRE_TIMEOUT_SECS") {
                    config.acquire_timeout = Duration::from_secs(secs);
                }
                config
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| parse(&p)).unwrap_or(8080),
            database,
        }
    }
}

fn parse<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_database() {
        let config = config(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_database_settings() {
        let config = config(&[
            ("DATABASE_URL", "postgres://cms@localhost/cms"),
            ("DB_MAX_CONNECTIONS", "50"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "2"),
        ]);

        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://cms@localhost/cms");
        assert_eq!(database.max_connections, 50);
        assert_eq!(database.min_connections, 2);
        assert_eq!(database.acquire_timeout, Duration::from_secs(2));
        assert_eq!(database.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config(&[
            ("PORT", "eighty"),
            ("DATABASE_URL", "postgres://localhost/cms"),
            ("DB_MIN_CONNECTIONS", "-1"),
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.database.unwrap().min_connections, 2);
    }
}
