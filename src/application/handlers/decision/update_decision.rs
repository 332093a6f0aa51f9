//! UpdateDecisionHandler - Command handler for editing decision entries.

use std::sync::Arc;

use crate::domain::decision::{DecisionEntry, DecisionType, ImpactLevel, Principle};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, OwnedByUser, UserId};
use crate::ports::DecisionRepository;

/// Command to replace the mutable fields of an entry.
#[derive(Debug, Clone)]
pub struct UpdateDecisionCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
    pub title: String,
    pub description: Option<String>,
    pub decision_type: DecisionType,
    pub impact_level: ImpactLevel,
    pub principle_applied: Option<Principle>,
    pub time_saved_estimate: f64,
}

/// Handler for updating decision entries. Owner only.
pub struct UpdateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl UpdateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDecisionCommand) -> Result<DecisionEntry, DomainError> {
        let mut entry = self
            .repository
            .find_by_id(&cmd.decision_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::DecisionNotFound, "Decision not found"))?;

        entry.check_ownership(&cmd.user_id)?;

        entry.update_details(
            cmd.title,
            cmd.description,
            cmd.decision_type,
            cmd.impact_level,
            cmd.principle_applied,
            cmd.time_saved_estimate,
        )?;

        self.repository.update(&entry).await?;
        Ok(entry)
    }
}
