//! AutomationRepository port for the shared automation bank.

use async_trait::async_trait;

use crate::domain::automation::AutomationEntry;
use crate::domain::foundation::{AutomationId, DomainError, UserId};

/// Repository for automation recipes.
#[async_trait]
pub trait AutomationRepository: Send + Sync {
    /// Inserts a new recipe.
    async fn create(&self, entry: &AutomationEntry) -> Result<(), DomainError>;

    /// Replaces an existing recipe.
    async fn update(&self, entry: &AutomationEntry) -> Result<(), DomainError>;

    /// Finds a recipe by id.
    async fn find_by_id(&self, id: &AutomationId) -> Result<Option<AutomationEntry>, DomainError>;

    /// Lists recipes visible to a user (their own plus public ones),
    /// newest first.
    async fn list_visible_to(&self, user_id: &UserId) -> Result<Vec<AutomationEntry>, DomainError>;

    /// Lists recipes created by a user, newest first.
    async fn list_by_owner(&self, user_id: &UserId) -> Result<Vec<AutomationEntry>, DomainError>;
}
