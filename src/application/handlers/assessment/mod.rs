//! Assessment handlers.

mod get_latest_assessment;
mod submit_assessment;

pub use get_latest_assessment::{GetLatestAssessmentHandler, GetLatestAssessmentQuery};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
