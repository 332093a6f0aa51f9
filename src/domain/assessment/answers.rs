//! Validated answer sheet for the symptom questionnaire.
//!
//! The canonical answer encoding is a boolean per item id: `true` means
//! the respondent identifies with the symptom. A sheet is only
//! constructible when every catalog item is answered, so scoring never
//! sees a partial submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::symptoms::{symptom_catalog, SYMPTOM_COUNT};

/// A complete set of answers, one boolean per symptom id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u8, bool>", into = "BTreeMap<u8, bool>")]
pub struct AnswerSheet(BTreeMap<u8, bool>);

impl AnswerSheet {
    /// Builds a sheet from raw answers, requiring exactly one answer per
    /// catalog item.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if an answer references an unknown item id
    /// - `IncompleteAssessment` if any catalog item is unanswered
    pub fn from_answers(answers: BTreeMap<u8, bool>) -> Result<Self, DomainError> {
        for id in answers.keys() {
            if !symptom_catalog().iter().any(|s| s.id == *id) {
                return Err(DomainError::new(
                    ErrorCode::ValidationFailed,
                    format!("Unknown questionnaire item: {}", id),
                )
                .with_detail("item_id", id.to_string()));
            }
        }

        let missing: Vec<String> = symptom_catalog()
            .iter()
            .filter(|s| !answers.contains_key(&s.id))
            .map(|s| s.id.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DomainError::new(
                ErrorCode::IncompleteAssessment,
                "All questionnaire items must be answered before submitting",
            )
            .with_detail("missing_items", missing.join(",")));
        }

        Ok(Self(answers))
    }

    /// Number of answered items. Always equals the catalog size.
    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// Number of answers indicating the symptom is present.
    pub fn symptoms_present(&self) -> usize {
        self.0.values().filter(|present| **present).count()
    }

    /// Number of answers not indicating the symptom.
    pub fn healthy(&self) -> usize {
        self.total() - self.symptoms_present()
    }

    /// Raw answers, keyed by item id.
    pub fn answers(&self) -> &BTreeMap<u8, bool> {
        &self.0
    }
}

impl TryFrom<BTreeMap<u8, bool>> for AnswerSheet {
    type Error = DomainError;

    fn try_from(answers: BTreeMap<u8, bool>) -> Result<Self, Self::Error> {
        Self::from_answers(answers)
    }
}

impl From<AnswerSheet> for BTreeMap<u8, bool> {
    fn from(sheet: AnswerSheet) -> Self {
        sheet.0
    }
}
