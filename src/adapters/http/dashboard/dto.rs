//! HTTP DTOs for the dashboard endpoint.

use serde::Serialize;

use crate::application::handlers::DashboardOverview;
use crate::domain::foundation::Timestamp;

/// Per-user summary backing the dashboard page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverviewResponse {
    pub score: u8,
    pub band: &'static str,
    pub last_assessment_date: Option<Timestamp>,
    pub automations_created: usize,
    pub hours_saved: f64,
    pub decisions_logged: usize,
}

impl From<DashboardOverview> for DashboardOverviewResponse {
    fn from(overview: DashboardOverview) -> Self {
        Self {
            score: overview.score.value(),
            band: overview.band.label(),
            last_assessment_date: overview.last_assessment_date,
            automations_created: overview.automations_created,
            hours_saved: overview.hours_saved,
            decisions_logged: overview.decisions_logged,
        }
    }
}
