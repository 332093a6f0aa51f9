//! HTTP adapter for decision log endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{DecisionListResponse, DecisionRequest, DecisionResponse};
pub use handlers::DecisionAppState;
pub use routes::decision_routes;
