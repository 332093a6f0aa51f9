//! PostgreSQL adapter for ProfileRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, Score, Timestamp, UserId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<UserProfile, DomainError> {
        let user_id: String = row.get("user_id");
        let score: i32 = row.get("score");
        let last_assessment_date: Option<chrono::DateTime<chrono::Utc>> =
            row.get("last_assessment_date");

        let user_id = UserId::new(user_id)?;
        let score = Score::try_new(score.clamp(0, 100) as u8)?;

        Ok(UserProfile::reconstitute(
            user_id,
            score,
            last_assessment_date.map(Timestamp::from_datetime),
        ))
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            "SELECT user_id, score, last_assessment_date FROM user_profiles WHERE user_id = $1",
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
