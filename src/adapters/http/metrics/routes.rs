//! HTTP routes for the team metrics endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_team_metrics, MetricsAppState};

/// Creates the metrics router. Nested under `/api/team`.
pub fn metrics_routes(state: MetricsAppState) -> Router {
    Router::new()
        .route("/metrics", get(get_team_metrics))
        .with_state(state)
}
