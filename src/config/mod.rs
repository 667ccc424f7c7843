//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `FINAID` prefix and `__`
//! between nesting levels.
//!
//! # Example
//!
//! ```no_run
//! use finaid::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod server;
mod storage;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server (bind address, logging, CORS, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend selection and delete policy
    #[serde(default)]
    pub storage: StorageConfig,

    /// PostgreSQL pool, used by the postgres backend only
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Reads `.env` when present, then every `FINAID__*` variable:
    ///
    /// - `FINAID__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FINAID__STORAGE__BACKEND=postgres` -> `storage.backend = postgres`
    /// - `FINAID__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FINAID")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation; the database section is checked only when the
    /// postgres backend is selected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if self.storage.uses_postgres() {
            self.database.validate()?;
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
