//! Environment-backed configuration.

use crate::error::ConfigError;

const DEFAULT_POOL_SIZE: usize = 16;

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    url: String,
    pub pool_size: usize,
}

impl DatabaseConfig {
    /// Read settings from the environment, honoring a `.env` file if present.
    ///
    /// `DATABASE_URL` is required; `DATABASE_POOL_SIZE` defaults to 16.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let pool_size = match std::env::var("DATABASE_POOL_SIZE") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("DATABASE_POOL_SIZE"))?,
            Err(_) => DEFAULT_POOL_SIZE,
        };

        Ok(Self { url, pool_size })
    }

    /// Build a config directly, bypassing the environment.
    pub fn new(url: impl Into<String>, pool_size: usize) -> Self {
        Self {
            url: url.into(),
            pool_size,
        }
    }

    /// The PostgreSQL connection URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
