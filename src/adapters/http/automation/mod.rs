//! HTTP adapter for automation bank endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AutomationListResponse, AutomationRequest, AutomationResponse};
pub use handlers::AutomationAppState;
pub use routes::automation_routes;
