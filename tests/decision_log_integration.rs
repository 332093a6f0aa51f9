//! Integration tests for the decision log flow.
//!
//! Runs the full create/list/update/delete cycle through the handlers
//! over an in-memory repository, checking ordering, filtering, and the
//! aggregate display values along the way.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use smart_laziness::application::handlers::{
    CreateDecisionCommand, CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler,
    ListDecisionsHandler, ListDecisionsQuery, UpdateDecisionCommand, UpdateDecisionHandler,
};
use smart_laziness::domain::decision::{
    DecisionEntry, DecisionType, DecisionTypeFilter, ImpactLevel, Principle,
};
use smart_laziness::domain::foundation::{DecisionId, DomainError, ErrorCode, UserId};
use smart_laziness::ports::DecisionRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory decision repository ordering lists newest first.
#[derive(Default)]
struct InMemoryDecisionRepository {
    entries: Mutex<Vec<DecisionEntry>>,
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn create(&self, entry: &DecisionEntry) -> Result<(), DomainError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &DecisionEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().unwrap();
        match entries.iter().position(|e| e.id() == entry.id()) {
            Some(pos) => {
                entries[pos] = entry.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::DecisionNotFound,
                "Decision not found",
            )),
        }
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError> {
        self.entries.lock().unwrap().retain(|e| e.id() != id);
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionEntry>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<DecisionEntry>, DomainError> {
        let mut own: Vec<DecisionEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect();
        own.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(own)
    }
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn create_cmd(owner: &str, title: &str, decision_type: DecisionType, hours: f64) -> CreateDecisionCommand {
    CreateDecisionCommand {
        user_id: user(owner),
        title: title.to_string(),
        description: None,
        decision_type,
        impact_level: ImpactLevel::Medium,
        principle_applied: Some(Principle::AskWhyBeforeHow),
        time_saved_estimate: hours,
    }
}

// =============================================================================
// Flow
// =============================================================================

#[tokio::test]
async fn full_crud_cycle() {
    let repo = Arc::new(InMemoryDecisionRepository::default());
    let create = CreateDecisionHandler::new(repo.clone());
    let update = UpdateDecisionHandler::new(repo.clone());
    let delete = DeleteDecisionHandler::new(repo.clone());
    let list = ListDecisionsHandler::new(repo.clone());

    let first = create
        .handle(create_cmd("alice", "Cancel meeting", DecisionType::Eliminate, 2.0))
        .await
        .unwrap();
    create
        .handle(create_cmd("alice", "Automate report", DecisionType::Automate, 4.0))
        .await
        .unwrap();

    // Newest first
    let all = list
        .handle(ListDecisionsQuery {
            user_id: user("alice"),
            filter: DecisionTypeFilter::All,
        })
        .await
        .unwrap();
    assert_eq!(all.entries.len(), 2);
    assert_eq!(all.entries[0].title(), "Automate report");
    assert_eq!(all.stats.total_time_saved, 6.0);
    assert_eq!(all.stats.average_time_saved, 3.0);

    // Update the first entry
    let updated = update
        .handle(UpdateDecisionCommand {
            user_id: user("alice"),
            decision_id: *first.id(),
            title: "Cancel both weekly meetings".to_string(),
            description: Some("Merged into one async update".to_string()),
            decision_type: DecisionType::Eliminate,
            impact_level: ImpactLevel::High,
            principle_applied: None,
            time_saved_estimate: 3.0,
        })
        .await
        .unwrap();
    assert_eq!(updated.title(), "Cancel both weekly meetings");

    // Delete it
    delete
        .handle(DeleteDecisionCommand {
            user_id: user("alice"),
            decision_id: *first.id(),
        })
        .await
        .unwrap();

    let remaining = list
        .handle(ListDecisionsQuery {
            user_id: user("alice"),
            filter: DecisionTypeFilter::All,
        })
        .await
        .unwrap();
    assert_eq!(remaining.entries.len(), 1);
    assert_eq!(remaining.stats.total_count, 1);
    assert_eq!(remaining.stats.average_time_saved, 4.0);
}

#[tokio::test]
async fn type_filter_narrows_list_and_stats() {
    let repo = Arc::new(InMemoryDecisionRepository::default());
    let create = CreateDecisionHandler::new(repo.clone());
    let list = ListDecisionsHandler::new(repo.clone());

    create
        .handle(create_cmd("alice", "Cancel meeting", DecisionType::Eliminate, 2.0))
        .await
        .unwrap();
    create
        .handle(create_cmd("alice", "Automate report", DecisionType::Automate, 4.0))
        .await
        .unwrap();
    create
        .handle(create_cmd("alice", "Automate invoices", DecisionType::Automate, 2.0))
        .await
        .unwrap();

    let automations_only = list
        .handle(ListDecisionsQuery {
            user_id: user("alice"),
            filter: DecisionTypeFilter::Only(DecisionType::Automate),
        })
        .await
        .unwrap();

    assert_eq!(automations_only.entries.len(), 2);
    assert_eq!(automations_only.stats.total_time_saved, 6.0);
    assert_eq!(automations_only.stats.average_time_saved, 3.0);
}

#[tokio::test]
async fn log_is_scoped_per_user() {
    let repo = Arc::new(InMemoryDecisionRepository::default());
    let create = CreateDecisionHandler::new(repo.clone());
    let list = ListDecisionsHandler::new(repo.clone());

    create
        .handle(create_cmd("alice", "Cancel meeting", DecisionType::Eliminate, 2.0))
        .await
        .unwrap();

    let for_bob = list
        .handle(ListDecisionsQuery {
            user_id: user("bob"),
            filter: DecisionTypeFilter::All,
        })
        .await
        .unwrap();

    assert!(for_bob.entries.is_empty());
    assert_eq!(for_bob.stats.average_time_saved, 0.0);
}

#[tokio::test]
async fn cross_user_edits_are_forbidden() {
    let repo = Arc::new(InMemoryDecisionRepository::default());
    let create = CreateDecisionHandler::new(repo.clone());
    let update = UpdateDecisionHandler::new(repo.clone());
    let delete = DeleteDecisionHandler::new(repo.clone());

    let entry = create
        .handle(create_cmd("alice", "Cancel meeting", DecisionType::Eliminate, 2.0))
        .await
        .unwrap();

    let update_err = update
        .handle(UpdateDecisionCommand {
            user_id: user("bob"),
            decision_id: *entry.id(),
            title: "Hijacked".to_string(),
            description: None,
            decision_type: DecisionType::Eliminate,
            impact_level: ImpactLevel::Low,
            principle_applied: None,
            time_saved_estimate: 0.0,
        })
        .await
        .unwrap_err();
    assert_eq!(update_err.code, ErrorCode::Forbidden);

    let delete_err = delete
        .handle(DeleteDecisionCommand {
            user_id: user("bob"),
            decision_id: *entry.id(),
        })
        .await
        .unwrap_err();
    assert_eq!(delete_err.code, ErrorCode::Forbidden);
}
