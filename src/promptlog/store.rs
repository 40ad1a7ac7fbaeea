//! PostgreSQL store for the prompt log.

use async_trait::async_trait;
use chrono::Utc;
use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::NoTls;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::error::DatabaseError;
use crate::promptlog::{PromptLogEntry, PromptLogRecord, UsageStats};

mod embedded {
    refinery::embed_migrations!("migrations");
}

/// Connection-pooled store backing the prompt log.
pub struct Store {
    pool: Pool,
}

impl Store {
    /// Create a new store and verify the database is reachable.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let mut cfg = Config::new();
        cfg.url = Some(config.url().to_string());
        cfg.pool = Some(deadpool_postgres::PoolConfig {
            max_size: config.pool_size,
            ..Default::default()
        });

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| DatabaseError::Pool(e.to_string()))?;

        // Test connection
        let _ = pool.get().await?;

        Ok(Self { pool })
    }

    /// Apply pending schema migrations.
    pub async fn run_migrations(&self) -> Result<refinery::Report, DatabaseError> {
        let mut conn = self.conn().await?;
        let report = embedded::migrations::runner().run_async(&mut **conn).await?;
        Ok(report)
    }

    /// Get a connection from the pool.
    pub(crate) async fn conn(&self) -> Result<deadpool_postgres::Object, DatabaseError> {
        Ok(self.pool.get().await?)
    }

    /// Insert one entry, assigning its id and creation time.
    pub async fn record_prompt(
        &self,
        record: PromptLogRecord,
    ) -> Result<PromptLogEntry, DatabaseError> {
        let conn = self.conn().await?;
        let entry = record.into_entry(Uuid::new_v4(), Utc::now());

        conn.execute(
            r#"
            INSERT INTO prompt_logs (
                id, system_prompt, user_prompt, provider, model, style, response,
                response_time_ms, success, ip_address, user_agent,
                original_length, corrected_length, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
            &[
                &entry.id,
                &entry.system,
                &entry.user,
                &entry.provider.as_str(),
                &entry.model,
                &entry.style.as_str(),
                &entry.response,
                &entry.response_time_ms.map(|ms| ms as i32),
                &entry.success,
                &entry.ip_address,
                &entry.user_agent,
                &entry.original_length,
                &entry.corrected_length,
                &entry.created_at,
            ],
        )
        .await?;

        Ok(entry)
    }
}

#[async_trait]
impl Database for Store {
    async fn record_prompt(
        &self,
        record: PromptLogRecord,
    ) -> Result<PromptLogEntry, DatabaseError> {
        self.record_prompt(record).await
    }

    async fn usage_stats(&self) -> Result<UsageStats, DatabaseError> {
        self.usage_stats().await
    }
}
