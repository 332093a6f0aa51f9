//! ProfileRepository port for the cached per-user score.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::UserProfile;

/// Read access to the per-user cached score.
///
/// Profiles are written only through `AssessmentRepository::record`, which
/// refreshes the cached score in the same transaction as the submission.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile for a user, if one exists.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;
}
