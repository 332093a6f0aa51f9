//! ListAutomationsHandler - Query handler for the automation bank.
//!
//! The repository already restricts rows to what the caller may see
//! (their own plus public ones); the optional search term is applied
//! on top, matching any of title, description, or tools.

use std::sync::Arc;

use crate::domain::automation::AutomationEntry;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AutomationRepository;

/// Query for visible recipes, optionally filtered by a search term.
#[derive(Debug, Clone)]
pub struct ListAutomationsQuery {
    pub user_id: UserId,
    pub search: Option<String>,
}

/// Handler listing automation recipes.
pub struct ListAutomationsHandler {
    repository: Arc<dyn AutomationRepository>,
}

impl ListAutomationsHandler {
    pub fn new(repository: Arc<dyn AutomationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListAutomationsQuery,
    ) -> Result<Vec<AutomationEntry>, DomainError> {
        let entries = self.repository.list_visible_to(&query.user_id).await?;

        let entries = match query.search.as_deref() {
            Some(term) => entries
                .into_iter()
                .filter(|entry| entry.matches_search(term))
                .collect(),
            None => entries,
        };

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::automation::{AutomationCategory, DifficultyLevel};
    use crate::domain::foundation::AutomationId;
    use async_trait::async_trait;

    struct MockAutomationRepository {
        entries: Vec<AutomationEntry>,
    }

    #[async_trait]
    impl AutomationRepository for MockAutomationRepository {
        async fn create(&self, _entry: &AutomationEntry) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _entry: &AutomationEntry) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &AutomationId,
        ) -> Result<Option<AutomationEntry>, DomainError> {
            Ok(None)
        }

        async fn list_visible_to(
            &self,
            user_id: &UserId,
        ) -> Result<Vec<AutomationEntry>, DomainError> {
            Ok(self
                .entries
                .iter()
                .filter(|e| e.is_visible_to(user_id))
                .cloned()
                .collect())
        }

        async fn list_by_owner(
            &self,
            user_id: &UserId,
        ) -> Result<Vec<AutomationEntry>, DomainError> {
            Ok(self
                .entries
                .iter()
                .filter(|e| e.created_by() == user_id)
                .cloned()
                .collect())
        }
    }

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn recipe(owner: &str, title: &str, tools: Option<&str>, is_public: bool) -> AutomationEntry {
        AutomationEntry::new(
            AutomationId::new(),
            user(owner),
            title.to_string(),
            None,
            AutomationCategory::Process,
            DifficultyLevel::Easy,
            1.0,
            1.0,
            tools.map(|t| t.to_string()),
            None,
            is_public,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn private_recipes_are_hidden_from_other_users() {
        let repo = Arc::new(MockAutomationRepository {
            entries: vec![
                recipe("alice", "Private report", None, false),
                recipe("alice", "Public report", None, true),
            ],
        });
        let handler = ListAutomationsHandler::new(repo);

        let for_bob = handler
            .handle(ListAutomationsQuery { user_id: user("bob"), search: None })
            .await
            .unwrap();

        assert_eq!(for_bob.len(), 1);
        assert_eq!(for_bob[0].title(), "Public report");
    }

    #[tokio::test]
    async fn owner_sees_own_private_recipes() {
        let repo = Arc::new(MockAutomationRepository {
            entries: vec![recipe("alice", "Private report", None, false)],
        });
        let handler = ListAutomationsHandler::new(repo);

        let for_alice = handler
            .handle(ListAutomationsQuery { user_id: user("alice"), search: None })
            .await
            .unwrap();

        assert_eq!(for_alice.len(), 1);
    }

    #[tokio::test]
    async fn search_filters_across_fields_case_insensitively() {
        let repo = Arc::new(MockAutomationRepository {
            entries: vec![
                recipe("alice", "Report builder", Some("Python"), true),
                recipe("alice", "Inbox triage", Some("Zapier"), true),
            ],
        });
        let handler = ListAutomationsHandler::new(repo);

        let hits = handler
            .handle(ListAutomationsQuery {
                user_id: user("bob"),
                search: Some("PYTHON".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title(), "Report builder");
    }

    #[tokio::test]
    async fn empty_search_returns_everything_visible() {
        let repo = Arc::new(MockAutomationRepository {
            entries: vec![
                recipe("alice", "One", None, true),
                recipe("bob", "Two", None, true),
            ],
        });
        let handler = ListAutomationsHandler::new(repo);

        let hits = handler
            .handle(ListAutomationsQuery {
                user_id: user("carol"),
                search: Some("  ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(hits.len(), 2);
    }
}
