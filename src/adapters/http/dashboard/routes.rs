//! HTTP routes for the dashboard endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_dashboard_overview, DashboardAppState};

/// Creates the dashboard router. Nested under `/api/dashboard`.
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        .route("/", get(get_dashboard_overview))
        .with_state(state)
}
