//! HTTP adapter for the per-user dashboard endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::DashboardOverviewResponse;
pub use handlers::DashboardAppState;
pub use routes::dashboard_routes;
