//! Team metrics module - pure aggregation over profiles and automations.

mod team;

pub use team::{AutomationStatRow, AutomatorRank, CategoryCount, ScoreDistribution, TeamMetrics};
