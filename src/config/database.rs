//! PostgreSQL connection settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Largest pool the service will open.
const MAX_POOL_SIZE: u32 = 100;

/// PostgreSQL connection pool configuration
///
/// Only consulted when `storage.backend` is `postgres`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` connection URL
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a free connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Seconds an idle connection is kept open
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Apply the embedded `migrations/` on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("database.url"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_run_migrations() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
        assert_eq!(config.idle_timeout(), Duration::from_secs(300));
        assert!(config.run_migrations);
    }

    #[test]
    fn test_url_is_required() {
        assert_eq!(
            DatabaseConfig::default().validate(),
            Err(ValidationError::MissingRequired("database.url"))
        );
    }

    #[test]
    fn test_url_must_be_postgres() {
        assert_eq!(
            with_url("mysql://localhost/finaid").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
        assert!(with_url("postgres://finaid@localhost/finaid").validate().is_ok());
    }

    #[test]
    fn test_pool_bounds() {
        let inverted = DatabaseConfig {
            min_connections: 10,
            max_connections: 5,
            ..with_url("postgresql://localhost/finaid")
        };
        assert_eq!(inverted.validate(), Err(ValidationError::InvalidPoolSize));

        let huge = DatabaseConfig {
            max_connections: 150,
            ..with_url("postgresql://localhost/finaid")
        };
        assert_eq!(huge.validate(), Err(ValidationError::PoolSizeTooLarge));
    }
}
