//! HTTP handlers for the team metrics endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{GetTeamMetricsHandler, GetTeamMetricsQuery};
use crate::ports::TeamMetricsReader;

use super::dto::TeamMetricsResponse;

/// Shared application state for the metrics endpoint.
#[derive(Clone)]
pub struct MetricsAppState {
    pub reader: Arc<dyn TeamMetricsReader>,
}

impl MetricsAppState {
    fn metrics_handler(&self) -> GetTeamMetricsHandler {
        GetTeamMetricsHandler::new(self.reader.clone())
    }
}

/// GET /api/team/metrics
///
/// Returns the team-wide aggregation. Any authenticated user may ask.
pub async fn get_team_metrics(
    State(state): State<MetricsAppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<TeamMetricsResponse>, ApiError> {
    let metrics = state.metrics_handler().handle(GetTeamMetricsQuery).await?;

    Ok(Json(metrics))
}
