//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionValidator` - token validation against the auth service
//! - `ProfileRepository` - cached per-user score persistence
//! - `AssessmentRepository` - immutable submissions plus the profile upsert
//! - `DecisionRepository` - decision log CRUD
//! - `AutomationRepository` - automation bank persistence and visibility
//! - `TeamMetricsReader` - raw rows for the team aggregation

mod assessment_repository;
mod automation_repository;
mod decision_repository;
mod metrics_reader;
mod profile_repository;
mod session_validator;

pub use assessment_repository::AssessmentRepository;
pub use automation_repository::AutomationRepository;
pub use decision_repository::DecisionRepository;
pub use metrics_reader::{MetricsError, TeamMetricsReader};
pub use profile_repository::ProfileRepository;
pub use session_validator::SessionValidator;
