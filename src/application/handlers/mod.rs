//! Application handlers, one per operation.

pub mod assessment;
pub mod automation;
pub mod dashboard;
pub mod decision;
pub mod metrics;

pub use assessment::{
    GetLatestAssessmentHandler, GetLatestAssessmentQuery, SubmitAssessmentCommand,
    SubmitAssessmentHandler, SubmitAssessmentResult,
};
pub use automation::{
    CreateAutomationCommand, CreateAutomationHandler, ListAutomationsHandler,
    ListAutomationsQuery, UpdateAutomationCommand, UpdateAutomationHandler,
};
pub use dashboard::{DashboardOverview, GetDashboardOverviewHandler, GetDashboardOverviewQuery};
pub use decision::{
    CreateDecisionCommand, CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler,
    ListDecisionsHandler, ListDecisionsQuery, ListDecisionsResult, UpdateDecisionCommand,
    UpdateDecisionHandler,
};
pub use metrics::{GetTeamMetricsHandler, GetTeamMetricsQuery};
