//! Read-only port feeding the team metrics aggregation.

use async_trait::async_trait;

use crate::domain::foundation::Score;
use crate::domain::metrics::AutomationStatRow;

/// Errors that can occur while reading metric rows.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for MetricsError {
    fn from(err: sqlx::Error) -> Self {
        MetricsError::Database(err.to_string())
    }
}

/// Supplies the raw rows the team aggregation reduces.
///
/// Reads are best-effort snapshots; the two fetches are not required to be
/// mutually consistent.
#[async_trait]
pub trait TeamMetricsReader: Send + Sync {
    /// All cached profile scores.
    async fn list_profile_scores(&self) -> Result<Vec<Score>, MetricsError>;

    /// All automation rows, reduced to the aggregation fields.
    async fn list_automation_stats(&self) -> Result<Vec<AutomationStatRow>, MetricsError>;
}
