//! CreateAutomationHandler - Command handler for new automation recipes.

use std::sync::Arc;

use crate::domain::automation::{AutomationCategory, AutomationEntry, DifficultyLevel};
use crate::domain::foundation::{AutomationId, DomainError, UserId};
use crate::ports::AutomationRepository;

/// Command to share a new automation recipe.
#[derive(Debug, Clone)]
pub struct CreateAutomationCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub category: AutomationCategory,
    pub difficulty_level: DifficultyLevel,
    pub time_to_implement: f64,
    pub hours_saved: f64,
    pub tools_used: Option<String>,
    pub steps_description: Option<String>,
    pub is_public: bool,
}

/// Handler for creating automation recipes.
pub struct CreateAutomationHandler {
    repository: Arc<dyn AutomationRepository>,
}

impl CreateAutomationHandler {
    pub fn new(repository: Arc<dyn AutomationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateAutomationCommand,
    ) -> Result<AutomationEntry, DomainError> {
        let entry = AutomationEntry::new(
            AutomationId::new(),
            cmd.user_id,
            cmd.title,
            cmd.description,
            cmd.category,
            cmd.difficulty_level,
            cmd.time_to_implement,
            cmd.hours_saved,
            cmd.tools_used,
            cmd.steps_description,
            cmd.is_public,
        )?;

        self.repository.create(&entry).await?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockAutomationRepository {
        created: Mutex<Vec<AutomationEntry>>,
    }

    impl MockAutomationRepository {
        fn new() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
            }
        }

        fn created(&self) -> Vec<AutomationEntry> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AutomationRepository for MockAutomationRepository {
        async fn create(&self, entry: &AutomationEntry) -> Result<(), DomainError> {
            self.created.lock().unwrap().push(entry.clone());
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
            _user_id: &UserId,
        ) -> Result<Vec<AutomationEntry>, DomainError> {
            Ok(vec![])
        }

        async fn list_by_owner(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<AutomationEntry>, DomainError> {
            Ok(vec![])
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    #[tokio::test]
    async fn creates_recipe_with_valid_input() {
        let repo = Arc::new(MockAutomationRepository::new());
        let handler = CreateAutomationHandler::new(repo.clone());

        let cmd = CreateAutomationCommand {
            user_id: test_user_id(),
            title: "Weekly report automation".to_string(),
            description: Some("Generates the Monday report".to_string()),
            category: AutomationCategory::Data,
            difficulty_level: DifficultyLevel::Medium,
            time_to_implement: 4.0,
            hours_saved: 1.5,
            tools_used: Some("Python".to_string()),
            steps_description: None,
            is_public: true,
        };

        let entry = handler.handle(cmd).await.unwrap();
        assert_eq!(entry.title(), "Weekly report automation");
        assert!(entry.is_public());
        assert_eq!(repo.created().len(), 1);
    }

    #[tokio::test]
    async fn fails_with_invalid_hours_and_writes_nothing() {
        let repo = Arc::new(MockAutomationRepository::new());
        let handler = CreateAutomationHandler::new(repo.clone());

        let cmd = CreateAutomationCommand {
            user_id: test_user_id(),
            title: "Broken".to_string(),
            description: None,
            category: AutomationCategory::Process,
            difficulty_level: DifficultyLevel::Easy,
            time_to_implement: -2.0,
            hours_saved: 0.0,
            tools_used: None,
            steps_description: None,
            is_public: false,
        };

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(repo.created().is_empty());
    }
}
