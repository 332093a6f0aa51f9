//! HTTP handlers for automation bank endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    CreateAutomationCommand, CreateAutomationHandler, ListAutomationsHandler,
    ListAutomationsQuery, UpdateAutomationCommand, UpdateAutomationHandler,
};
use crate::domain::foundation::AutomationId;
use crate::ports::AutomationRepository;

use super::dto::{AutomationListResponse, AutomationRequest, AutomationResponse};

/// Shared application state for automation endpoints.
#[derive(Clone)]
pub struct AutomationAppState {
    pub automations: Arc<dyn AutomationRepository>,
}

impl AutomationAppState {
    fn create_handler(&self) -> CreateAutomationHandler {
        CreateAutomationHandler::new(self.automations.clone())
    }

    fn update_handler(&self) -> UpdateAutomationHandler {
        UpdateAutomationHandler::new(self.automations.clone())
    }

    fn list_handler(&self) -> ListAutomationsHandler {
        ListAutomationsHandler::new(self.automations.clone())
    }
}

/// Query parameters for the automation list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListAutomationsParams {
    /// Free-text search over title, description, and tools.
    pub search: Option<String>,
}

/// GET /api/automations?search=term
pub async fn list_automations(
    State(state): State<AutomationAppState>,
    Query(params): Query<ListAutomationsParams>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<AutomationListResponse>, ApiError> {
    let query = ListAutomationsQuery {
        user_id: user.id,
        search: params.search,
    };

    let entries = state.list_handler().handle(query).await?;

    Ok(Json(AutomationListResponse {
        automations: entries.iter().map(AutomationResponse::from).collect(),
    }))
}

/// POST /api/automations
pub async fn create_automation(
    State(state): State<AutomationAppState>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<AutomationRequest>,
) -> Result<(StatusCode, Json<AutomationResponse>), ApiError> {
    let cmd = CreateAutomationCommand {
        user_id: user.id,
        title: req.title,
        description: req.description,
        category: req.category,
        difficulty_level: req.difficulty_level,
        time_to_implement: req.time_to_implement,
        hours_saved: req.hours_saved,
        tools_used: req.tools_used,
        steps_description: req.steps_description,
        is_public: req.is_public,
    };

    let entry = state.create_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(AutomationResponse::from(&entry))))
}

/// PUT /api/automations/:id
pub async fn update_automation(
    State(state): State<AutomationAppState>,
    Path(id_str): Path<String>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<AutomationRequest>,
) -> Result<Json<AutomationResponse>, ApiError> {
    let automation_id: AutomationId = id_str
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid automation ID format".to_string()))?;

    let cmd = UpdateAutomationCommand {
        user_id: user.id,
        automation_id,
        title: req.title,
        description: req.description,
        category: req.category,
        difficulty_level: req.difficulty_level,
        time_to_implement: req.time_to_implement,
        hours_saved: req.hours_saved,
        tools_used: req.tools_used,
        steps_description: req.steps_description,
        is_public: req.is_public,
    };

    let entry = state.update_handler().handle(cmd).await?;

    Ok(Json(AutomationResponse::from(&entry)))
}
