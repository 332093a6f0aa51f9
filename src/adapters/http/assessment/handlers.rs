//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    GetLatestAssessmentHandler, GetLatestAssessmentQuery, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
use crate::domain::assessment::{symptom_catalog, Symptom};
use crate::ports::AssessmentRepository;

use super::dto::{AssessmentResponse, SubmitAssessmentRequest};

/// Shared application state for assessment endpoints.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub assessments: Arc<dyn AssessmentRepository>,
}

impl AssessmentAppState {
    fn submit_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.assessments.clone())
    }

    fn latest_handler(&self) -> GetLatestAssessmentHandler {
        GetLatestAssessmentHandler::new(self.assessments.clone())
    }
}

/// GET /api/assessments/symptoms
///
/// Returns the fixed questionnaire catalog.
pub async fn list_symptoms(RequireAuth(_user): RequireAuth) -> Json<&'static [Symptom]> {
    Json(symptom_catalog())
}

/// POST /api/assessments
///
/// Submits a completed questionnaire; persists the result and the
/// refreshed profile atomically.
pub async fn submit_assessment(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentResponse>), ApiError> {
    let cmd = SubmitAssessmentCommand {
        user_id: user.id,
        answers: req.answers,
    };

    let result = state.submit_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(AssessmentResponse::from(&result.result)),
    ))
}

/// GET /api/assessments/latest
///
/// Returns the caller's most recent submission.
pub async fn get_latest_assessment(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let query = GetLatestAssessmentQuery { user_id: user.id };

    match state.latest_handler().handle(query).await? {
        Some(result) => Ok(Json(AssessmentResponse::from(&result))),
        None => Err(ApiError::NotFound("No assessment taken yet".to_string())),
    }
}
