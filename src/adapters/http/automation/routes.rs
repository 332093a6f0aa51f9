//! HTTP routes for automation bank endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    create_automation, list_automations, update_automation, AutomationAppState,
};

/// Creates the automation router. Nested under `/api/automations`.
pub fn automation_routes(state: AutomationAppState) -> Router {
    Router::new()
        .route("/", get(list_automations))
        .route("/", post(create_automation))
        .route("/:id", put(update_automation))
        .with_state(state)
}
