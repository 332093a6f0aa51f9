//! Assessment module - symptom catalog, answer sheets, scoring and bands.

mod answers;
mod result;
mod scoring;
mod symptoms;

pub use answers::AnswerSheet;
pub use result::AssessmentResult;
pub use scoring::{compute_score, ScoreBand};
pub use symptoms::{symptom_catalog, Symptom, SYMPTOM_COUNT};
