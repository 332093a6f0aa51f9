//! HTTP handlers for the dashboard endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{GetDashboardOverviewHandler, GetDashboardOverviewQuery};
use crate::ports::{AutomationRepository, DecisionRepository, ProfileRepository};

use super::dto::DashboardOverviewResponse;

/// Shared application state for the dashboard endpoint.
#[derive(Clone)]
pub struct DashboardAppState {
    pub profiles: Arc<dyn ProfileRepository>,
    pub decisions: Arc<dyn DecisionRepository>,
    pub automations: Arc<dyn AutomationRepository>,
}

impl DashboardAppState {
    fn overview_handler(&self) -> GetDashboardOverviewHandler {
        GetDashboardOverviewHandler::new(
            self.profiles.clone(),
            self.decisions.clone(),
            self.automations.clone(),
        )
    }
}

/// GET /api/dashboard
///
/// Returns the caller's score, band, and activity counters.
pub async fn get_dashboard_overview(
    State(state): State<DashboardAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DashboardOverviewResponse>, ApiError> {
    let query = GetDashboardOverviewQuery { user_id: user.id };

    let overview = state.overview_handler().handle(query).await?;

    Ok(Json(DashboardOverviewResponse::from(overview)))
}
