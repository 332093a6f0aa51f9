//! GetDashboardOverviewHandler - Query handler for the per-user summary.
//!
//! Combines the cached profile score with the user's own automation and
//! decision counts. A user without a profile (no assessment taken yet)
//! gets a zero score rather than an error.

use std::sync::Arc;

use crate::domain::assessment::ScoreBand;
use crate::domain::foundation::{DomainError, Score, Timestamp, UserId};
use crate::ports::{AutomationRepository, DecisionRepository, ProfileRepository};

/// Query for a user's dashboard overview.
#[derive(Debug, Clone)]
pub struct GetDashboardOverviewQuery {
    pub user_id: UserId,
}

/// Per-user summary backing the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub score: Score,
    pub band: ScoreBand,
    pub last_assessment_date: Option<Timestamp>,
    pub automations_created: usize,
    pub hours_saved: f64,
    pub decisions_logged: usize,
}

/// Handler assembling the dashboard overview.
pub struct GetDashboardOverviewHandler {
    profiles: Arc<dyn ProfileRepository>,
    decisions: Arc<dyn DecisionRepository>,
    automations: Arc<dyn AutomationRepository>,
}

impl GetDashboardOverviewHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        decisions: Arc<dyn DecisionRepository>,
        automations: Arc<dyn AutomationRepository>,
    ) -> Self {
        Self {
            profiles,
            decisions,
            automations,
        }
    }

    pub async fn handle(
        &self,
        query: GetDashboardOverviewQuery,
    ) -> Result<DashboardOverview, DomainError> {
        let profile = self.profiles.find_by_user(&query.user_id).await?;
        let (score, last_assessment_date) = match profile {
            Some(profile) => (profile.score(), profile.last_assessment_date().copied()),
            None => (Score::ZERO, None),
        };

        let own_automations = self.automations.list_by_owner(&query.user_id).await?;
        let hours_saved: f64 = own_automations.iter().map(|a| a.hours_saved()).sum();

        let decisions = self.decisions.list_by_user(&query.user_id).await?;

        Ok(DashboardOverview {
            score,
            band: ScoreBand::for_score(score),
            last_assessment_date,
            automations_created: own_automations.len(),
            hours_saved,
            decisions_logged: decisions.len(),
        })
    }
}
