//! DecisionRepository port for decision log entries.

use async_trait::async_trait;

use crate::domain::decision::DecisionEntry;
use crate::domain::foundation::{DecisionId, DomainError, UserId};

/// Repository for user-owned decision log entries.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Inserts a new entry.
    async fn create(&self, entry: &DecisionEntry) -> Result<(), DomainError>;

    /// Replaces an existing entry.
    async fn update(&self, entry: &DecisionEntry) -> Result<(), DomainError>;

    /// Deletes an entry by id.
    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError>;

    /// Finds an entry by id.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionEntry>, DomainError>;

    /// Lists a user's entries, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<DecisionEntry>, DomainError>;
}
