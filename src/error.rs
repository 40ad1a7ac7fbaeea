//! Error types.

use thiserror::Error;

/// Failures talking to PostgreSQL.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The connection pool could not be created.
    #[error("failed to create connection pool: {0}")]
    Pool(String),

    /// No connection could be checked out of the pool.
    #[error("connection checkout failed: {0}")]
    Checkout(#[from] deadpool_postgres::PoolError),

    /// A query failed.
    #[error("query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// A schema migration failed.
    #[error("migration failed: {0}")]
    Migration(#[from] refinery::Error),
}

/// A candidate prompt log entry failed schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown provider `{0}`")]
    UnknownProvider(String),

    #[error("unknown citation style `{0}`")]
    UnknownStyle(String),
}

/// Configuration could not be read from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {0} has an invalid value")]
    InvalidVar(&'static str),
}
