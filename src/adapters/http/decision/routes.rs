//! HTTP routes for decision log endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    create_decision, delete_decision, list_decisions, update_decision, DecisionAppState,
};

/// Creates the decision router. Nested under `/api/decisions`.
pub fn decision_routes(state: DecisionAppState) -> Router {
    Router::new()
        .route("/", get(list_decisions))
        .route("/", post(create_decision))
        .route("/:id", put(update_decision))
        .route("/:id", delete(delete_decision))
        .with_state(state)
}
