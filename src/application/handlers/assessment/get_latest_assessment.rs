//! GetLatestAssessmentHandler - Query handler for the most recent submission.

use std::sync::Arc;

use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentRepository;

/// Query for a user's most recent submission.
#[derive(Debug, Clone)]
pub struct GetLatestAssessmentQuery {
    pub user_id: UserId,
}

/// Handler returning the most recent assessment, if any.
pub struct GetLatestAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetLatestAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetLatestAssessmentQuery,
    ) -> Result<Option<AssessmentResult>, DomainError> {
        self.repository.find_latest_by_user(&query.user_id).await
    }
}
