//! HTTP DTOs for decision log endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{
    DecisionEntry, DecisionStats, DecisionType, ImpactLevel, Principle,
};
use crate::domain::foundation::Timestamp;

/// Request body for creating or fully updating an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRequest {
    pub title: String,
    pub description: Option<String>,
    pub decision_type: DecisionType,
    pub impact_level: ImpactLevel,
    pub principle_applied: Option<Principle>,
    #[serde(default)]
    pub time_saved_estimate: f64,
}

/// One decision entry.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub decision_type: DecisionType,
    pub impact_level: ImpactLevel,
    pub principle_applied: Option<Principle>,
    /// Display name for the cited principle, when one is set.
    pub principle_name: Option<&'static str>,
    pub time_saved_estimate: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&DecisionEntry> for DecisionResponse {
    fn from(entry: &DecisionEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            title: entry.title().to_string(),
            description: entry.description().map(|d| d.to_string()),
            decision_type: entry.decision_type(),
            impact_level: entry.impact_level(),
            principle_applied: entry.principle_applied(),
            principle_name: entry.principle_applied().map(|p| p.name()),
            time_saved_estimate: entry.time_saved_estimate(),
            created_at: *entry.created_at(),
            updated_at: *entry.updated_at(),
        }
    }
}

/// Entries plus their aggregate display values.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionListResponse {
    pub decisions: Vec<DecisionResponse>,
    pub stats: DecisionStats,
}
