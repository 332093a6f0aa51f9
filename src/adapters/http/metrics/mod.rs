//! HTTP adapter for the team metrics endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::TeamMetricsResponse;
pub use handlers::MetricsAppState;
pub use routes::metrics_routes;
