//! PostgreSQL adapter for AssessmentRepository.
//!
//! The result insert and profile upsert run in one transaction so a
//! stored submission always has a matching cached score.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::assessment::{AnswerSheet, AssessmentResult};
use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, Score, Timestamp, UserId,
};
use crate::domain::profile::UserProfile;
use crate::ports::AssessmentRepository;

/// PostgreSQL implementation of AssessmentRepository.
#[derive(Clone)]
pub struct PgAssessmentRepository {
    pool: PgPool,
}

impl PgAssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<AssessmentResult, DomainError> {
        let id: Uuid = row.get("id");
        let user_id: String = row.get("user_id");
        let answers: serde_json::Value = row.get("answers");
        let score: i32 = row.get("score");
        let symptoms_count: i32 = row.get("symptoms_count");
        let taken_at: chrono::DateTime<chrono::Utc> = row.get("taken_at");

        let answers: AnswerSheet = serde_json::from_value(answers).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to deserialize answers: {}", e),
            )
        })?;

        Ok(AssessmentResult::reconstitute(
            AssessmentId::from_uuid(id),
            UserId::new(user_id)?,
            answers,
            Score::try_new(score.clamp(0, 100) as u8)?,
            symptoms_count.clamp(0, i32::from(u8::MAX)) as u8,
            Timestamp::from_datetime(taken_at),
        ))
    }
}

#[async_trait]
impl AssessmentRepository for PgAssessmentRepository {
    async fn record(
        &self,
        result: &AssessmentResult,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        let answers = serde_json::to_value(result.answers()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize answers: {}", e),
            )
        })?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO assessments (id, user_id, answers, score, symptoms_count, taken_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(result.id().as_uuid())
        .bind(result.user_id().as_str())
        .bind(answers)
        .bind(result.score().value() as i32)
        .bind(result.symptoms_count() as i32)
        .bind(*result.taken_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id, score, last_assessment_date, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            ON CONFLICT (user_id) DO UPDATE
            SET score = EXCLUDED.score,
                last_assessment_date = EXCLUDED.last_assessment_date,
                updated_at = now()
            "#,
        )
        .bind(profile.user_id().as_str())
        .bind(profile.score().value() as i32)
        .bind(profile.last_assessment_date().map(|ts| *ts.as_datetime()))
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(())
    }

    async fn find_latest_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<AssessmentResult>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, answers, score, symptoms_count, taken_at
            FROM assessments
            WHERE user_id = $1
            ORDER BY taken_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        match row {
            Some(row) => Ok(Some(Self::from_row(&row)?)),
            None => Ok(None),
        }
    }
}
