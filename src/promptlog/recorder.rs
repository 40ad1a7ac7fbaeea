//! Best-effort recording facade.

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::error::DatabaseError;
use crate::promptlog::{NewPromptLog, PromptLogEntry, Store, UsageStats};

/// Append-only prompt log with swallow-and-degrade semantics.
///
/// Logging is strictly secondary to the AI request path that triggers it: a
/// candidate that fails validation or a store that is unreachable costs one
/// diagnostic line, never an error to the caller.
pub struct PromptLogger {
    db: Arc<dyn Database>,
}

impl PromptLogger {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// Connect a logger backed by PostgreSQL.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::new(Arc::new(Store::new(config).await?)))
    }

    /// Validate and persist one entry.
    ///
    /// Returns the persisted entry, or `None` if it was discarded. No write
    /// is performed when validation fails.
    pub async fn append(&self, candidate: NewPromptLog) -> Option<PromptLogEntry> {
        let record = match candidate.validate() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "discarding prompt log entry that failed validation");
                return None;
            }
        };

        match self.db.record_prompt(record).await {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist prompt log entry");
                None
            }
        }
    }

    /// Usage statistics over all persisted entries.
    ///
    /// Degrades to the zero-valued summary when the store cannot be queried;
    /// callers cannot distinguish that from an empty log.
    pub async fn statistics(&self) -> UsageStats {
        match self.db.usage_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(error = %e, "failed to aggregate prompt log statistics");
                UsageStats::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;
    use crate::promptlog::PromptLogRecord;

    /// Keeps inserts in memory.
    #[derive(Default)]
    struct MemoryDb {
        entries: Mutex<Vec<PromptLogEntry>>,
    }

    #[async_trait]
    impl Database for MemoryDb {
        async fn record_prompt(
            &self,
            record: PromptLogRecord,
        ) -> Result<PromptLogEntry, DatabaseError> {
            let entry = record.into_entry(Uuid::new_v4(), Utc::now());
            self.entries.lock().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn usage_stats(&self) -> Result<UsageStats, DatabaseError> {
            Ok(UsageStats {
                total: self.entries.lock().unwrap().len() as u64,
                ..Default::default()
            })
        }
    }

    /// Fails every operation, as an unreachable database would.
    struct DownDb;

    #[async_trait]
    impl Database for DownDb {
        async fn record_prompt(
            &self,
            _record: PromptLogRecord,
        ) -> Result<PromptLogEntry, DatabaseError> {
            Err(DatabaseError::Pool("connection refused".into()))
        }

        async fn usage_stats(&self) -> Result<UsageStats, DatabaseError> {
            Err(DatabaseError::Pool("connection refused".into()))
        }
    }

    fn candidate() -> NewPromptLog {
        NewPromptLog {
            system: "Corrija a bibliografia a seguir.".into(),
            user: "SILVA, J. Minha tese. 2020.".into(),
            provider: "openrouter".into(),
            model: "anthropic/claude-3-haiku".into(),
            style: "abnt".into(),
            success: true,
            response_time_ms: Some(640),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn append_returns_persisted_entry() {
        let db = Arc::new(MemoryDb::default());
        let log = PromptLogger::new(db.clone());

        let entry = log.append(candidate()).await.expect("entry should persist");
        assert_eq!(entry.provider.as_str(), "openrouter");
        assert!(entry.created_at <= Utc::now());
        assert_eq!(db.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn append_rejects_invalid_candidate_without_writing() {
        let db = Arc::new(MemoryDb::default());
        let log = PromptLogger::new(db.clone());

        let entry = log
            .append(NewPromptLog {
                provider: "azure".into(),
                ..candidate()
            })
            .await;

        assert!(entry.is_none());
        assert!(db.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_swallows_store_failure() {
        let log = PromptLogger::new(Arc::new(DownDb));
        assert!(log.append(candidate()).await.is_none());
    }

    #[tokio::test]
    async fn statistics_degrade_to_zero_on_store_failure() {
        let log = PromptLogger::new(Arc::new(DownDb));
        assert_eq!(log.statistics().await, UsageStats::default());
    }
}
