//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter (dto, handlers, routes).

pub mod assessment;
pub mod automation;
pub mod dashboard;
pub mod decision;
mod error;
pub mod metrics;
pub mod middleware;

pub use assessment::{assessment_routes, AssessmentAppState};
pub use automation::{automation_routes, AutomationAppState};
pub use dashboard::{dashboard_routes, DashboardAppState};
pub use decision::{decision_routes, DecisionAppState};
pub use error::{ApiError, ErrorResponse};
pub use metrics::{metrics_routes, MetricsAppState};
