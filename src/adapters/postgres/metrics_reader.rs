//! PostgreSQL implementation of TeamMetricsReader.
//!
//! Read-optimized: only the columns the aggregation needs are fetched.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::automation::AutomationCategory;
use crate::domain::foundation::{Score, UserId};
use crate::domain::metrics::AutomationStatRow;
use crate::ports::{MetricsError, TeamMetricsReader};

/// PostgreSQL implementation of TeamMetricsReader.
#[derive(Clone)]
pub struct PgTeamMetricsReader {
    pool: PgPool,
}

impl PgTeamMetricsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMetricsReader for PgTeamMetricsReader {
    async fn list_profile_scores(&self) -> Result<Vec<Score>, MetricsError> {
        let rows = sqlx::query("SELECT score FROM user_profiles")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let score: i32 = row.get("score");
                Score::new(score.clamp(0, 100) as u8)
            })
            .collect())
    }

    async fn list_automation_stats(&self) -> Result<Vec<AutomationStatRow>, MetricsError> {
        let rows = sqlx::query(
            r#"
            SELECT created_by, category, hours_saved
            FROM automations
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let created_by: String = row.get("created_by");
                let category: String = row.get("category");
                let hours_saved: f64 = row.get("hours_saved");

                let created_by = UserId::new(created_by)
                    .map_err(|e| MetricsError::Database(e.to_string()))?;
                let category: AutomationCategory = category
                    .parse()
                    .map_err(|e: crate::domain::foundation::ValidationError| {
                        MetricsError::Database(e.to_string())
                    })?;

                Ok(AutomationStatRow {
                    created_by,
                    category,
                    hours_saved,
                })
            })
            .collect()
    }
}
