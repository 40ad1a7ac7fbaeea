//! Usage statistics over the prompt log.
//!
//! Aggregation methods are implemented directly on [`Store`] for convenience.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::DatabaseError;
use crate::promptlog::Store;

/// Summary of prompt log usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageStats {
    pub total: u64,
    pub successes: u64,
    /// Percentage of successful calls, rounded to two decimals.
    pub success_rate: f64,
    /// Mean response time of successful calls, rounded to the nearest millisecond.
    pub avg_response_time_ms: u64,
    pub by_provider: HashMap<String, u64>,
    pub by_style: HashMap<String, u64>,
}

/// Raw aggregates as the database returns them, before rounding.
#[derive(Debug, Clone, Default)]
pub struct UsageAggregates {
    pub total: i64,
    pub successes: i64,
    pub avg_response_time_ms: Option<f64>,
    pub by_provider: Vec<(String, i64)>,
    pub by_style: Vec<(String, i64)>,
}

impl From<UsageAggregates> for UsageStats {
    fn from(agg: UsageAggregates) -> Self {
        let success_rate = if agg.total > 0 {
            round2(agg.successes as f64 / agg.total as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            total: agg.total as u64,
            successes: agg.successes as u64,
            success_rate,
            avg_response_time_ms: agg
                .avg_response_time_ms
                .map(|ms| ms.round() as u64)
                .unwrap_or(0),
            by_provider: counts(agg.by_provider),
            by_style: counts(agg.by_style),
        }
    }
}

fn counts(pairs: Vec<(String, i64)>) -> HashMap<String, u64> {
    pairs.into_iter().map(|(key, n)| (key, n as u64)).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Store {
    /// Aggregate usage statistics over all persisted entries.
    pub async fn usage_stats(&self) -> Result<UsageStats, DatabaseError> {
        let conn = self.conn().await?;

        let row = conn
            .query_one(
                r#"
                SELECT
                    COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE success) AS successes,
                    (AVG(response_time_ms) FILTER (WHERE success))::float8 AS avg_response_time
                FROM prompt_logs
                "#,
                &[],
            )
            .await?;

        let mut agg = UsageAggregates {
            total: row.get("total"),
            successes: row.get("successes"),
            avg_response_time_ms: row.get("avg_response_time"),
            ..Default::default()
        };

        let providers = conn
            .query(
                "SELECT provider, COUNT(*) AS total FROM prompt_logs GROUP BY provider",
                &[],
            )
            .await?;
        agg.by_provider = providers
            .iter()
            .map(|r| (r.get("provider"), r.get("total")))
            .collect();

        let styles = conn
            .query(
                "SELECT style, COUNT(*) AS total FROM prompt_logs GROUP BY style",
                &[],
            )
            .await?;
        agg.by_style = styles
            .iter()
            .map(|r| (r.get("style"), r.get("total")))
            .collect();

        Ok(agg.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_aggregates_yield_zero_summary() {
        assert_eq!(UsageStats::from(UsageAggregates::default()), UsageStats::default());
    }

    #[test]
    fn summary_reflects_counts_and_groupings() {
        let agg = UsageAggregates {
            total: 4,
            successes: 3,
            avg_response_time_ms: Some(200.0),
            by_provider: vec![("openrouter".into(), 2), ("openai".into(), 2)],
            by_style: vec![("abnt".into(), 3), ("vancouver".into(), 1)],
        };

        let stats = UsageStats::from(agg);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.successes, 3);
        assert_eq!(stats.success_rate, 75.0);
        assert_eq!(stats.avg_response_time_ms, 200);
        assert_eq!(stats.by_provider["openrouter"], 2);
        assert_eq!(stats.by_provider["openai"], 2);
        assert_eq!(stats.by_style["abnt"], 3);
        assert_eq!(stats.by_style["vancouver"], 1);
    }

    #[test]
    fn rate_keeps_two_decimals() {
        let agg = UsageAggregates {
            total: 3,
            successes: 1,
            ..Default::default()
        };
        assert_eq!(UsageStats::from(agg).success_rate, 33.33);
    }

    #[test]
    fn mean_rounds_to_nearest_millisecond() {
        let agg = UsageAggregates {
            total: 2,
            successes: 2,
            avg_response_time_ms: Some(150.5),
            ..Default::default()
        };
        assert_eq!(UsageStats::from(agg).avg_response_time_ms, 151);
    }

    #[test]
    fn no_successful_entries_yield_zero_mean() {
        let agg = UsageAggregates {
            total: 2,
            successes: 0,
            avg_response_time_ms: None,
            ..Default::default()
        };

        let stats = UsageStats::from(agg);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.avg_response_time_ms, 0);
    }
}
