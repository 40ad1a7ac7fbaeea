use async_trait::async_trait;

use crate::error::DatabaseError;
use crate::promptlog::{PromptLogEntry, PromptLogRecord, UsageStats};

/// Database abstraction layer.
///
/// [`crate::promptlog::Store`] is the production implementation; tests
/// substitute stand-ins to exercise the swallow-and-degrade contract of
/// [`crate::promptlog::PromptLogger`].
#[async_trait]
pub trait Database: Send + Sync {
    /// Persist one validated entry, returning it with id and timestamp assigned.
    async fn record_prompt(&self, record: PromptLogRecord)
        -> Result<PromptLogEntry, DatabaseError>;

    /// Aggregate usage statistics over all persisted entries.
    async fn usage_stats(&self) -> Result<UsageStats, DatabaseError>;
}
