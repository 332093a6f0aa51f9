//! Automation bank module - shared automation recipes.

mod entry;

pub use entry::{AutomationCategory, AutomationEntry, DifficultyLevel};
