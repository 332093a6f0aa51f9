//! User profile entity.
//!
//! One row per user holding the cached score from the most recent
//! assessment. The profile is upserted together with the assessment
//! result in a single transaction.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AssessmentResult, ScoreBand};
use crate::domain::foundation::{Score, Timestamp, UserId};

/// Cached per-user score and the date it was last refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    user_id: UserId,
    score: Score,
    last_assessment_date: Option<Timestamp>,
}

impl UserProfile {
    /// Creates a fresh profile with no assessment taken yet.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            score: Score::ZERO,
            last_assessment_date: None,
        }
    }

    /// Builds the profile state implied by a submitted assessment.
    pub fn from_assessment(result: &AssessmentResult) -> Self {
        Self {
            user_id: result.user_id().clone(),
            score: result.score(),
            last_assessment_date: Some(*result.taken_at()),
        }
    }

    /// Reconstitutes a profile from persistence.
    pub fn reconstitute(
        user_id: UserId,
        score: Score,
        last_assessment_date: Option<Timestamp>,
    ) -> Self {
        Self {
            user_id,
            score,
            last_assessment_date,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn last_assessment_date(&self) -> Option<&Timestamp> {
        self.last_assessment_date.as_ref()
    }

    /// Band the cached score falls into.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}
