//! PostgreSQL adapter for AutomationRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::automation::{AutomationCategory, AutomationEntry, DifficultyLevel};
use crate::domain::foundation::{AutomationId, DomainError, Timestamp, UserId};
use crate::ports::AutomationRepository;

/// PostgreSQL implementation of AutomationRepository.
#[derive(Clone)]
pub struct PgAutomationRepository {
    pool: PgPool,
}

impl PgAutomationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<AutomationEntry, DomainError> {
        let id: Uuid = row.get("id");
        let created_by: String = row.get("created_by");
        let title: String = row.get("title");
        let description: Option<String> = row.get("description");
        let category: String = row.get("category");
        let difficulty_level: String = row.get("difficulty_level");
        let time_to_implement: f64 = row.get("time_to_implement");
        let hours_saved: f64 = row.get("hours_saved");
        let tools_used: Option<String> = row.get("tools_used");
        let steps_description: Option<String> = row.get("steps_description");
        let is_public: bool = row.get("is_public");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
        let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

        let category: AutomationCategory = category.parse()?;
        let difficulty_level: DifficultyLevel = difficulty_level.parse()?;

        Ok(AutomationEntry::reconstitute(
            AutomationId::from_uuid(id),
            UserId::new(created_by)?,
            title,
            description,
            category,
            difficulty_level,
            time_to_implement,
            hours_saved,
            tools_used,
            steps_description,
            is_public,
            Timestamp::from_datetime(created_at),
            Timestamp::from_datetime(updated_at),
        ))
    }
}

#[async_trait]
impl AutomationRepository for PgAutomationRepository {
    async fn create(&self, entry: &AutomationEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO automations (
                id, created_by, title, description, category, difficulty_level,
                time_to_implement, hours_saved, tools_used, steps_description,
                is_public, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.created_by().as_str())
        .bind(entry.title())
        .bind(entry.description())
        .bind(entry.category().as_str())
        .bind(entry.difficulty_level().as_str())
        .bind(entry.time_to_implement())
        .bind(entry.hours_saved())
        .bind(entry.tools_used())
        .bind(entry.steps_description())
        .bind(entry.is_public())
        .bind(*entry.created_at().as_datetime())
        .bind(*entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, entry: &AutomationEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE automations
            SET title = $2,
                description = $3,
                category = $4,
                difficulty_level = $5,
                time_to_implement = $6,
                hours_saved = $7,
                tools_used = $8,
                steps_description = $9,
                is_public = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.title())
        .bind(entry.description())
        .bind(entry.category().as_str())
        .bind(entry.difficulty_level().as_str())
        .bind(entry.time_to_implement())
        .bind(entry.hours_saved())
        .bind(entry.tools_used())
        .bind(entry.steps_description())
        .bind(entry.is_public())
        .bind(*entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &AutomationId) -> Result<Option<AutomationEntry>, DomainError> {
        let row = sqlx::query("SELECT * FROM automations WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        match row {
            Some(row) => Ok(Some(Self::from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_visible_to(&self, user_id: &UserId) -> Result<Vec<AutomationEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM automations
            WHERE created_by = $1 OR is_public = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn list_by_owner(&self, user_id: &UserId) -> Result<Vec<AutomationEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM automations
            WHERE created_by = $1
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
