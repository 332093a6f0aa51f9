//! CreateDecisionHandler - Command handler for new decision entries.

use std::sync::Arc;

use crate::domain::decision::{DecisionEntry, DecisionType, ImpactLevel, Principle};
use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::ports::DecisionRepository;

/// Command to create a decision entry.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub decision_type: DecisionType,
    pub impact_level: ImpactLevel,
    pub principle_applied: Option<Principle>,
    pub time_saved_estimate: f64,
}

/// Handler for creating decision entries.
pub struct CreateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl CreateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<DecisionEntry, DomainError> {
        let entry = DecisionEntry::new(
            DecisionId::new(),
            cmd.user_id,
            cmd.title,
            cmd.description,
            cmd.decision_type,
            cmd.impact_level,
            cmd.principle_applied,
            cmd.time_saved_estimate,
        )?;

        self.repository.create(&entry).await?;
        Ok(entry)
    }
}
