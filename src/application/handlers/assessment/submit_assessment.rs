//! SubmitAssessmentHandler - Command handler for questionnaire submissions.
//!
//! Builds the answer sheet (rejecting partial submissions), derives the
//! score, and hands the result plus the refreshed profile to the
//! repository, which persists both in a single transaction.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::assessment::{AnswerSheet, AssessmentResult};
use crate::domain::foundation::{AssessmentId, DomainError, UserId};
use crate::domain::profile::UserProfile;
use crate::ports::AssessmentRepository;

/// Command to submit a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user_id: UserId,
    /// Raw answers keyed by item id; `true` = symptom present.
    pub answers: BTreeMap<u8, bool>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub result: AssessmentResult,
}

/// Handler for submitting assessments.
pub struct SubmitAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl SubmitAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        // Rejects unknown ids and partial submissions before any write.
        let sheet = AnswerSheet::from_answers(cmd.answers)?;

        let result = AssessmentResult::new(AssessmentId::new(), cmd.user_id, sheet);
        let profile = UserProfile::from_assessment(&result);

        self.repository.record(&result, &profile).await?;

        Ok(SubmitAssessmentResult { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::SYMPTOM_COUNT;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockAssessmentRepository {
        recorded: Mutex<Vec<(AssessmentResult, UserProfile)>>,
        fail_record: bool,
    }

    impl MockAssessmentRepository {
        fn new() -> Self {
            Self {
                recorded: Mutex::new(Vec::new()),
                fail_record: false,
            }
        }

        fn failing() -> Self {
            Self {
                recorded: Mutex::new(Vec::new()),
                fail_record: true,
            }
        }

        fn recorded(&self) -> Vec<(AssessmentResult, UserProfile)> {
            self.recorded.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssessmentRepository for MockAssessmentRepository {
        async fn record(
            &self,
            result: &AssessmentResult,
            profile: &UserProfile,
        ) -> Result<(), DomainError> {
            if self.fail_record {
                return Err(DomainError::database("Simulated record failure"));
            }
            self.recorded
                .lock()
                .unwrap()
                .push((result.clone(), profile.clone()));
            Ok(())
        }

        async fn find_latest_by_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<AssessmentResult>, DomainError> {
            Ok(None)
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    fn answers_with_present(present: &[u8]) -> BTreeMap<u8, bool> {
        (1..=SYMPTOM_COUNT as u8)
            .map(|id| (id, present.contains(&id)))
            .collect()
    }

    #[tokio::test]
    async fn records_result_and_profile_together() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = SubmitAssessmentHandler::new(repo.clone());

        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: answers_with_present(&[1, 4, 7]),
        };

        let result = handler.handle(cmd).await.unwrap();
        assert_eq!(result.result.score().value(), 70);
        assert_eq!(result.result.symptoms_count(), 3);

        let recorded = repo.recorded();
        assert_eq!(recorded.len(), 1);
        let (stored_result, stored_profile) = &recorded[0];
        assert_eq!(stored_profile.score(), stored_result.score());
        assert_eq!(
            stored_profile.last_assessment_date(),
            Some(stored_result.taken_at())
        );
    }

    #[tokio::test]
    async fn rejects_incomplete_submission_without_writing() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = SubmitAssessmentHandler::new(repo.clone());

        let mut answers = answers_with_present(&[]);
        answers.remove(&3);

        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers,
        };

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteAssessment);
        assert!(repo.recorded().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_item_without_writing() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = SubmitAssessmentHandler::new(repo.clone());

        let mut answers = answers_with_present(&[]);
        answers.insert(42, true);

        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers,
        };

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(repo.recorded().is_empty());
    }

    #[tokio::test]
    async fn propagates_repository_failure() {
        let repo = Arc::new(MockAssessmentRepository::failing());
        let handler = SubmitAssessmentHandler::new(repo);

        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: answers_with_present(&[]),
        };

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn perfect_sheet_yields_hundred() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = SubmitAssessmentHandler::new(repo);

        let cmd = SubmitAssessmentCommand {
            user_id: test_user_id(),
            answers: answers_with_present(&[]),
        };

        let result = handler.handle(cmd).await.unwrap();
        assert_eq!(result.result.score().value(), 100);
        assert_eq!(result.result.symptoms_count(), 0);
    }
}
