//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::Timestamp;

/// Request body for submitting a completed questionnaire.
///
/// `answers` maps item id to `true` when the respondent identifies with
/// the symptom.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: BTreeMap<u8, bool>,
}

/// An assessment result with its band and recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub score: u8,
    pub symptoms_count: u8,
    pub band: &'static str,
    pub band_description: &'static str,
    pub recommendations: &'static [&'static str],
    pub taken_at: Timestamp,
}

impl From<&AssessmentResult> for AssessmentResponse {
    fn from(result: &AssessmentResult) -> Self {
        let band = result.band();
        Self {
            id: result.id().to_string(),
            score: result.score().value(),
            symptoms_count: result.symptoms_count(),
            band: band.label(),
            band_description: band.description(),
            recommendations: band.recommendations(),
            taken_at: *result.taken_at(),
        }
    }
}
