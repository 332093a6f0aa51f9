//! HTTP handlers for decision log endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    CreateDecisionCommand, CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler,
    ListDecisionsHandler, ListDecisionsQuery, UpdateDecisionCommand, UpdateDecisionHandler,
};
use crate::domain::decision::DecisionTypeFilter;
use crate::domain::foundation::DecisionId;
use crate::ports::DecisionRepository;

use super::dto::{DecisionListResponse, DecisionRequest, DecisionResponse};

/// Shared application state for decision endpoints.
#[derive(Clone)]
pub struct DecisionAppState {
    pub decisions: Arc<dyn DecisionRepository>,
}

impl DecisionAppState {
    fn create_handler(&self) -> CreateDecisionHandler {
        CreateDecisionHandler::new(self.decisions.clone())
    }

    fn update_handler(&self) -> UpdateDecisionHandler {
        UpdateDecisionHandler::new(self.decisions.clone())
    }

    fn delete_handler(&self) -> DeleteDecisionHandler {
        DeleteDecisionHandler::new(self.decisions.clone())
    }

    fn list_handler(&self) -> ListDecisionsHandler {
        ListDecisionsHandler::new(self.decisions.clone())
    }
}

/// Query parameters for the decision list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListDecisionsParams {
    /// "all" or one of the decision types; absent means "all".
    pub decision_type: Option<String>,
}

/// GET /api/decisions?decision_type=all|eliminate|automate|delegate|simplify
pub async fn list_decisions(
    State(state): State<DecisionAppState>,
    Query(params): Query<ListDecisionsParams>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DecisionListResponse>, ApiError> {
    let filter = match params.decision_type.as_deref() {
        None => DecisionTypeFilter::All,
        Some(raw) => raw
            .parse::<DecisionTypeFilter>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
    };

    let query = ListDecisionsQuery {
        user_id: user.id,
        filter,
    };

    let result = state.list_handler().handle(query).await?;

    Ok(Json(DecisionListResponse {
        decisions: result.entries.iter().map(DecisionResponse::from).collect(),
        stats: result.stats,
    }))
}

/// POST /api/decisions
pub async fn create_decision(
    State(state): State<DecisionAppState>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<DecisionRequest>,
) -> Result<(StatusCode, Json<DecisionResponse>), ApiError> {
    let cmd = CreateDecisionCommand {
        user_id: user.id,
        title: req.title,
        description: req.description,
        decision_type: req.decision_type,
        impact_level: req.impact_level,
        principle_applied: req.principle_applied,
        time_saved_estimate: req.time_saved_estimate,
    };

    let entry = state.create_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(DecisionResponse::from(&entry))))
}

/// PUT /api/decisions/:id
pub async fn update_decision(
    State(state): State<DecisionAppState>,
    Path(id_str): Path<String>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<DecisionResponse>, ApiError> {
    let decision_id: DecisionId = id_str
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid decision ID format".to_string()))?;

    let cmd = UpdateDecisionCommand {
        user_id: user.id,
        decision_id,
        title: req.title,
        description: req.description,
        decision_type: req.decision_type,
        impact_level: req.impact_level,
        principle_applied: req.principle_applied,
        time_saved_estimate: req.time_saved_estimate,
    };

    let entry = state.update_handler().handle(cmd).await?;

    Ok(Json(DecisionResponse::from(&entry)))
}

/// DELETE /api/decisions/:id
pub async fn delete_decision(
    State(state): State<DecisionAppState>,
    Path(id_str): Path<String>,
    RequireAuth(user): RequireAuth,
) -> Result<StatusCode, ApiError> {
    let decision_id: DecisionId = id_str
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid decision ID format".to_string()))?;

    let cmd = DeleteDecisionCommand {
        user_id: user.id,
        decision_id,
    };

    state.delete_handler().handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}
