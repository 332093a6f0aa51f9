//! Decision log handlers.

mod create_decision;
mod delete_decision;
mod list_decisions;
mod update_decision;

pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler};
pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use list_decisions::{ListDecisionsHandler, ListDecisionsQuery, ListDecisionsResult};
pub use update_decision::{UpdateDecisionCommand, UpdateDecisionHandler};
