//! Automation bank handlers.

mod create_automation;
mod list_automations;
mod update_automation;

pub use create_automation::{CreateAutomationCommand, CreateAutomationHandler};
pub use list_automations::{ListAutomationsHandler, ListAutomationsQuery};
pub use update_automation::{UpdateAutomationCommand, UpdateAutomationHandler};
