//! Assessment result entity.
//!
//! One record per submission. Results are immutable: the struct exposes
//! no mutators and the repository has no update operation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, Score, Timestamp, UserId};

use super::scoring::{compute_score, ScoreBand};
use super::AnswerSheet;

/// An immutable questionnaire submission with its derived score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    id: AssessmentId,
    user_id: UserId,
    answers: AnswerSheet,
    score: Score,
    symptoms_count: u8,
    taken_at: Timestamp,
}

impl AssessmentResult {
    /// Creates a result from a complete answer sheet, deriving the score.
    pub fn new(id: AssessmentId, user_id: UserId, answers: AnswerSheet) -> Self {
        let symptoms_count = answers.symptoms_present() as u8;
        let score = compute_score(answers.total(), answers.symptoms_present());

        Self {
            id,
            user_id,
            answers,
            score,
            symptoms_count,
            taken_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a result from persistence (no recomputation).
    pub fn reconstitute(
        id: AssessmentId,
        user_id: UserId,
        answers: AnswerSheet,
        score: Score,
        symptoms_count: u8,
        taken_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            answers,
            score,
            symptoms_count,
            taken_at,
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn symptoms_count(&self) -> u8 {
        self.symptoms_count
    }

    pub fn taken_at(&self) -> &Timestamp {
        &self.taken_at
    }

    /// Band the derived score falls into.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}
