//! HTTP DTOs for automation bank endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::automation::{AutomationCategory, AutomationEntry, DifficultyLevel};
use crate::domain::foundation::Timestamp;

/// Request body for creating or fully updating a recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct AutomationRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: AutomationCategory,
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub time_to_implement: f64,
    #[serde(default)]
    pub hours_saved: f64,
    pub tools_used: Option<String>,
    pub steps_description: Option<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
}

fn default_is_public() -> bool {
    true
}

/// One automation recipe.
#[derive(Debug, Clone, Serialize)]
pub struct AutomationResponse {
    pub id: String,
    pub created_by: String,
    pub title: String,
    pub description: Option<String>,
    pub category: AutomationCategory,
    pub difficulty_level: DifficultyLevel,
    pub time_to_implement: f64,
    pub hours_saved: f64,
    pub tools_used: Option<String>,
    pub steps_description: Option<String>,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&AutomationEntry> for AutomationResponse {
    fn from(entry: &AutomationEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            created_by: entry.created_by().to_string(),
            title: entry.title().to_string(),
            description: entry.description().map(|d| d.to_string()),
            category: entry.category(),
            difficulty_level: entry.difficulty_level(),
            time_to_implement: entry.time_to_implement(),
            hours_saved: entry.hours_saved(),
            tools_used: entry.tools_used().map(|t| t.to_string()),
            steps_description: entry.steps_description().map(|s| s.to_string()),
            is_public: entry.is_public(),
            created_at: *entry.created_at(),
            updated_at: *entry.updated_at(),
        }
    }
}

/// Recipes visible to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct AutomationListResponse {
    pub automations: Vec<AutomationResponse>,
}
