//! ListDecisionsHandler - Query handler for a user's decision log.
//!
//! Returns the filtered entries together with the aggregate display
//! values (count, total and average time saved) computed over the
//! filtered list.

use std::sync::Arc;

use crate::domain::decision::{DecisionEntry, DecisionStats, DecisionTypeFilter};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::DecisionRepository;

/// Query for a user's entries, optionally narrowed to one type.
#[derive(Debug, Clone)]
pub struct ListDecisionsQuery {
    pub user_id: UserId,
    pub filter: DecisionTypeFilter,
}

/// Filtered entries plus their aggregates.
#[derive(Debug, Clone)]
pub struct ListDecisionsResult {
    pub entries: Vec<DecisionEntry>,
    pub stats: DecisionStats,
}

/// Handler listing decision entries.
pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<ListDecisionsResult, DomainError> {
        let entries: Vec<DecisionEntry> = self
            .repository
            .list_by_user(&query.user_id)
            .await?
            .into_iter()
            .filter(|entry| query.filter.matches(entry))
            .collect();

        let stats = DecisionStats::from_entries(&entries);

        Ok(ListDecisionsResult { entries, stats })
    }
}
