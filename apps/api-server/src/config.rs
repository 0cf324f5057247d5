//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use quill_infra::DatabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DB_USER is not specified")]
    MissingDbUser,

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the time a single request may spend in the service layer.
    pub request_timeout: Duration,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_user = lookup("DB_USER").unwrap_or_default();
        if db_user.is_empty() {
            return Err(ConfigError::MissingDbUser);
        }
        let db_password = lookup("DB_PASSWORD").unwrap_or_default();
        let db_name = lookup("DB_NAME").unwrap_or_default();
        let db_host = lookup("DB_HOST").unwrap_or_else(|| "db".to_string());
        let db_port: u16 = parse_or(&lookup, "DB_PORT", 5432)?;

        let max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?;
        let min_connections: u32 = parse_or(&lookup, "DB_MIN_CONNECTIONS", 1)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: max_connections.to_string(),
            });
        }
        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: min_connections.to_string(),
            });
        }

        let timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8000)?,
            request_timeout: Duration::from_secs(timeout_secs),
            database: DatabaseConfig {
                url: format!(
                    "postgresql://{db_user}:{db_password}@{db_host}:{db_port}/{db_name}"
                ),
                max_connections,
                min_connections,
            },
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_deployment() {
        let config = load(&[
            ("DB_USER", "quill"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "posts"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(
            config.database.url,
            "postgresql://quill:secret@db:5432/posts"
        );
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 1);
    }

    #[test]
    fn empty_db_user_fails_fast() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingDbUser)));
        assert!(matches!(
            load(&[("DB_USER", "")]),
            Err(ConfigError::MissingDbUser)
        ));
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("DB_USER", "quill"),
            ("DB_HOST", "localhost"),
            ("DB_PORT", "6543"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("DB_MIN_CONNECTIONS", "5"),
            ("PORT", "9000"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.database.url, "postgresql://quill:@localhost:6543/");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 5);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = load(&[("DB_USER", "quill"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = load(&[
            ("DB_USER", "quill"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_MIN_CONNECTIONS", "3"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                ..
            }
        ));
    }
}
