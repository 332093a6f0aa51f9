//! AssessmentRepository port for questionnaire submissions.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::UserProfile;

/// Repository for immutable assessment submissions.
///
/// Results are insert-only; there is deliberately no update operation.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persists the result and the refreshed profile atomically.
    ///
    /// Implementations must apply both writes in a single transaction so a
    /// stored result always has a matching profile score.
    async fn record(
        &self,
        result: &AssessmentResult,
        profile: &UserProfile,
    ) -> Result<(), DomainError>;

    /// Returns the most recent submission for a user, if any.
    async fn find_latest_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<AssessmentResult>, DomainError>;
}
