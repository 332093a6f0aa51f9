//! PostgreSQL adapters implementing the persistence ports.

mod assessment_repository;
mod automation_repository;
mod decision_repository;
mod metrics_reader;
mod profile_repository;

pub use assessment_repository::PgAssessmentRepository;
pub use automation_repository::PgAutomationRepository;
pub use decision_repository::PgDecisionRepository;
pub use metrics_reader::PgTeamMetricsReader;
pub use profile_repository::PgProfileRepository;
