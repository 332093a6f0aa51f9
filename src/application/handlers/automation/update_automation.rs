//! UpdateAutomationHandler - Command handler for editing automation recipes.

use std::sync::Arc;

use crate::domain::automation::{AutomationCategory, AutomationEntry, DifficultyLevel};
use crate::domain::foundation::{AutomationId, DomainError, ErrorCode, OwnedByUser, UserId};
use crate::ports::AutomationRepository;

/// Command to replace the mutable fields of a recipe. Owner only.
#[derive(Debug, Clone)]
pub struct UpdateAutomationCommand {
    pub user_id: UserId,
    pub automation_id: AutomationId,
    pub title: String,
    pub description: Option<String>,
    pub category: AutomationCategory,
    pub difficulty_level: DifficultyLevel,
    pub time_to_implement: f64,
    pub hours_saved: f64,
    pub tools_used: Option<String>,
    pub steps_description: Option<String>,
    pub is_public: bool,
}

/// Handler for updating automation recipes.
pub struct UpdateAutomationHandler {
    repository: Arc<dyn AutomationRepository>,
}

impl UpdateAutomationHandler {
    pub fn new(repository: Arc<dyn AutomationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAutomationCommand,
    ) -> Result<AutomationEntry, DomainError> {
        let mut entry = self
            .repository
            .find_by_id(&cmd.automation_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::AutomationNotFound, "Automation not found")
            })?;

        entry.check_ownership(&cmd.user_id)?;

        entry.update_details(
            cmd.title,
            cmd.description,
            cmd.category,
            cmd.difficulty_level,
            cmd.time_to_implement,
            cmd.hours_saved,
            cmd.tools_used,
            cmd.steps_description,
            cmd.is_public,
        )?;

        self.repository.update(&entry).await?;
        Ok(entry)
    }
}
