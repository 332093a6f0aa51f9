//! Display aggregates and filtering for the decision log.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::entry::{DecisionEntry, DecisionType};

/// Filter over the decision list: everything, or one specific type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecisionTypeFilter {
    #[default]
    All,
    Only(DecisionType),
}

impl DecisionTypeFilter {
    /// Whether an entry passes the filter.
    pub fn matches(&self, entry: &DecisionEntry) -> bool {
        match self {
            DecisionTypeFilter::All => true,
            DecisionTypeFilter::Only(dt) => entry.decision_type() == *dt,
        }
    }
}

impl FromStr for DecisionTypeFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(DecisionTypeFilter::All)
        } else {
            Ok(DecisionTypeFilter::Only(s.parse()?))
        }
    }
}

/// Aggregate display values for a decision list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionStats {
    /// Number of entries.
    pub total_count: usize,
    /// Sum of time saved estimates, hours per week.
    pub total_time_saved: f64,
    /// Mean time saved; 0.0 when the list is empty.
    pub average_time_saved: f64,
}

impl DecisionStats {
    /// Computes stats over a list of entries.
    pub fn from_entries(entries: &[DecisionEntry]) -> Self {
        let total_count = entries.len();
        let total_time_saved: f64 = entries.iter().map(|e| e.time_saved_estimate()).sum();
        let average_time_saved = if total_count == 0 {
            0.0
        } else {
            total_time_saved / total_count as f64
        };

        Self {
            total_count,
            total_time_saved,
            average_time_saved,
        }
    }
}
