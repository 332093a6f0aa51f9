//! GetTeamMetricsHandler - Query handler for the team-wide aggregation.
//!
//! Fetches the raw rows through the reader port and reduces them with
//! the pure domain computation.

use std::sync::Arc;

use crate::domain::metrics::TeamMetrics;
use crate::ports::{MetricsError, TeamMetricsReader};

/// Query for the team metrics snapshot. Any authenticated user may ask.
#[derive(Debug, Clone, Default)]
pub struct GetTeamMetricsQuery;

/// Handler computing team metrics.
pub struct GetTeamMetricsHandler {
    reader: Arc<dyn TeamMetricsReader>,
}

impl GetTeamMetricsHandler {
    pub fn new(reader: Arc<dyn TeamMetricsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: GetTeamMetricsQuery) -> Result<TeamMetrics, MetricsError> {
        let scores = self.reader.list_profile_scores().await?;
        let automations = self.reader.list_automation_stats().await?;

        Ok(TeamMetrics::compute(&scores, &automations))
    }
}
