//! PostgreSQL adapter for DecisionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::decision::{DecisionEntry, DecisionType, ImpactLevel, Principle};
use crate::domain::foundation::{DecisionId, DomainError, Timestamp, UserId};
use crate::ports::DecisionRepository;

/// PostgreSQL implementation of DecisionRepository.
#[derive(Clone)]
pub struct PgDecisionRepository {
    pool: PgPool,
}

impl PgDecisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<DecisionEntry, DomainError> {
        let id: Uuid = row.get("id");
        let user_id: String = row.get("user_id");
        let title: String = row.get("title");
        let description: Option<String> = row.get("description");
        let decision_type: String = row.get("decision_type");
        let impact_level: String = row.get("impact_level");
        let principle_applied: Option<String> = row.get("principle_applied");
        let time_saved_estimate: f64 = row.get("time_saved_estimate");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
        let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

        let decision_type: DecisionType = decision_type.parse()?;
        let impact_level: ImpactLevel = impact_level.parse()?;
        let principle_applied: Option<Principle> = principle_applied
            .map(|raw| raw.parse())
            .transpose()?;

        Ok(DecisionEntry::reconstitute(
            DecisionId::from_uuid(id),
            UserId::new(user_id)?,
            title,
            description,
            decision_type,
            impact_level,
            principle_applied,
            time_saved_estimate,
            Timestamp::from_datetime(created_at),
            Timestamp::from_datetime(updated_at),
        ))
    }
}

#[async_trait]
impl DecisionRepository for PgDecisionRepository {
    async fn create(&self, entry: &DecisionEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO decision_logs (
                id, user_id, title, description, decision_type, impact_level,
                principle_applied, time_saved_estimate, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.user_id().as_str())
        .bind(entry.title())
        .bind(entry.description())
        .bind(entry.decision_type().as_str())
        .bind(entry.impact_level().as_str())
        .bind(entry.principle_applied().map(|p| p.as_str()))
        .bind(entry.time_saved_estimate())
        .bind(*entry.created_at().as_datetime())
        .bind(*entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, entry: &DecisionEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE decision_logs
            SET title = $2,
                description = $3,
                decision_type = $4,
                impact_level = $5,
                principle_applied = $6,
                time_saved_estimate = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.title())
        .bind(entry.description())
        .bind(entry.decision_type().as_str())
        .bind(entry.impact_level().as_str())
        .bind(entry.principle_applied().map(|p| p.as_str()))
        .bind(entry.time_saved_estimate())
        .bind(*entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM decision_logs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionEntry>, DomainError> {
        let row = sqlx::query("SELECT * FROM decision_logs WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        match row {
            Some(row) => Ok(Some(Self::from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<DecisionEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM decision_logs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        rows.iter().map(Self::from_row).collect()
    }
}
