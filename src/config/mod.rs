//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `SCREENING`
//! prefix and nested sections use `__` as the separator, e.g.
//! `SCREENING__SERVER__PORT=8080` or
//! `SCREENING__CONTENT_STORE__TOKEN=sk-...`.

mod content_store;
mod error;
mod server;

pub use content_store::ContentStoreConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, timeouts, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Content-store write path configuration
    pub content_store: ContentStoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file first when present (development), then reads
    /// `SCREENING`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required values are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SCREENING")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.content_store.validate()?;
        Ok(())
    }
}
