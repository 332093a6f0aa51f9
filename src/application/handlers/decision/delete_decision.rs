//! DeleteDecisionHandler - Command handler for removing decision entries.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, OwnedByUser, UserId};
use crate::ports::DecisionRepository;

/// Command to delete an entry. Owner only.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
}

/// Handler for deleting decision entries.
pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), DomainError> {
        let entry = self
            .repository
            .find_by_id(&cmd.decision_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::DecisionNotFound, "Decision not found"))?;

        entry.check_ownership(&cmd.user_id)?;

        self.repository.delete(&cmd.decision_id).await
    }
}
