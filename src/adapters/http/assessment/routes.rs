//! HTTP routes for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_latest_assessment, list_symptoms, submit_assessment, AssessmentAppState,
};

/// Creates the assessment router. Nested under `/api/assessments`.
pub fn assessment_routes(state: AssessmentAppState) -> Router {
    Router::new()
        .route("/", post(submit_assessment))
        .route("/latest", get(get_latest_assessment))
        .route("/symptoms", get(list_symptoms))
        .with_state(state)
}
