//! Team metrics handlers.

mod get_team_metrics;

pub use get_team_metrics::{GetTeamMetricsHandler, GetTeamMetricsQuery};
