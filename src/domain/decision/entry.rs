//! Decision log entry and its categorical fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    DecisionId, DomainError, OwnedByUser, Timestamp, UserId, ValidationError,
};

/// Maximum length for an entry title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// What was done to the task the decision is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    Eliminate,
    Automate,
    Delegate,
    Simplify,
}

impl DecisionType {
    /// All types, in display order.
    pub const ALL: [DecisionType; 4] = [
        DecisionType::Eliminate,
        DecisionType::Automate,
        DecisionType::Delegate,
        DecisionType::Simplify,
    ];

    /// Stable token used in the API and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionType::Eliminate => "eliminate",
            DecisionType::Automate => "automate",
            DecisionType::Delegate => "delegate",
            DecisionType::Simplify => "simplify",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DecisionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eliminate" => Ok(DecisionType::Eliminate),
            "automate" => Ok(DecisionType::Automate),
            "delegate" => Ok(DecisionType::Delegate),
            "simplify" => Ok(DecisionType::Simplify),
            other => Err(ValidationError::invalid_format(
                "decision_type",
                format!("unknown type '{}'", other),
            )),
        }
    }
}

/// Expected impact of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImpactLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ImpactLevel::Low),
            "medium" => Ok(ImpactLevel::Medium),
            "high" => Ok(ImpactLevel::High),
            other => Err(ValidationError::invalid_format(
                "impact_level",
                format!("unknown level '{}'", other),
            )),
        }
    }
}

/// The fixed catalog of ten Smart Laziness principles a decision can cite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Principle {
    AskWhyBeforeHow,
    FanaticalAboutLeverage,
    NoAsDefaultAnswer,
    SystemsNotDependencies,
    ObsessOverMultiplication,
    MeasureOutputNotInput,
    EliminateBeforeOptimizing,
    ProtectDeepWork,
    SimplicityAsStatus,
    RestIsATool,
}

impl Principle {
    /// All principles, in catalog order.
    pub const ALL: [Principle; 10] = [
        Principle::AskWhyBeforeHow,
        Principle::FanaticalAboutLeverage,
        Principle::NoAsDefaultAnswer,
        Principle::SystemsNotDependencies,
        Principle::ObsessOverMultiplication,
        Principle::MeasureOutputNotInput,
        Principle::EliminateBeforeOptimizing,
        Principle::ProtectDeepWork,
        Principle::SimplicityAsStatus,
        Principle::RestIsATool,
    ];

    /// Stable token used in the API and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Principle::AskWhyBeforeHow => "ask_why_before_how",
            Principle::FanaticalAboutLeverage => "fanatical_about_leverage",
            Principle::NoAsDefaultAnswer => "no_as_default_answer",
            Principle::SystemsNotDependencies => "systems_not_dependencies",
            Principle::ObsessOverMultiplication => "obsess_over_multiplication",
            Principle::MeasureOutputNotInput => "measure_output_not_input",
            Principle::EliminateBeforeOptimizing => "eliminate_before_optimizing",
            Principle::ProtectDeepWork => "protect_deep_work",
            Principle::SimplicityAsStatus => "simplicity_as_status",
            Principle::RestIsATool => "rest_is_a_tool",
        }
    }

    /// Display name shown in clients.
    pub fn name(&self) -> &'static str {
        match self {
            Principle::AskWhyBeforeHow => "Ask \"Why?\" Before \"How?\"",
            Principle::FanaticalAboutLeverage => "Fanatical About Leverage",
            Principle::NoAsDefaultAnswer => "\"No\" as the Default Answer",
            Principle::SystemsNotDependencies => "Build Systems, Not Dependencies",
            Principle::ObsessOverMultiplication => "Obsess Over Multiplication",
            Principle::MeasureOutputNotInput => "Measure Output, Not Input",
            Principle::EliminateBeforeOptimizing => "Eliminate Before Optimizing",
            Principle::ProtectDeepWork => "Protect Deep Work",
            Principle::SimplicityAsStatus => "Simplicity as Status",
            Principle::RestIsATool => "Rest Is a Tool",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Principle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Principle::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "principle_applied",
                    format!("unknown principle '{}'", s),
                )
            })
    }
}

/// A recorded efficiency decision, owned by its creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEntry {
    id: DecisionId,
    user_id: UserId,
    title: String,
    description: Option<String>,
    decision_type: DecisionType,
    impact_level: ImpactLevel,
    principle_applied: Option<Principle>,
    /// Estimated hours saved per week.
    time_saved_estimate: f64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DecisionEntry {
    /// Creates a new entry.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty/too long or the
    ///   time estimate is negative or not finite
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: DecisionId,
        user_id: UserId,
        title: String,
        description: Option<String>,
        decision_type: DecisionType,
        impact_level: ImpactLevel,
        principle_applied: Option<Principle>,
        time_saved_estimate: f64,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_time_saved(time_saved_estimate)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            title,
            description,
            decision_type,
            impact_level,
            principle_applied,
            time_saved_estimate,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes an entry from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DecisionId,
        user_id: UserId,
        title: String,
        description: Option<String>,
        decision_type: DecisionType,
        impact_level: ImpactLevel,
        principle_applied: Option<Principle>,
        time_saved_estimate: f64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            decision_type,
            impact_level,
            principle_applied,
            time_saved_estimate,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn decision_type(&self) -> DecisionType {
        self.decision_type
    }

    pub fn impact_level(&self) -> ImpactLevel {
        self.impact_level
    }

    pub fn principle_applied(&self) -> Option<Principle> {
        self.principle_applied
    }

    pub fn time_saved_estimate(&self) -> f64 {
        self.time_saved_estimate
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replaces the mutable fields of the entry.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` on the same rules as [`DecisionEntry::new`]
    pub fn update_details(
        &mut self,
        title: String,
        description: Option<String>,
        decision_type: DecisionType,
        impact_level: ImpactLevel,
        principle_applied: Option<Principle>,
        time_saved_estimate: f64,
    ) -> Result<(), DomainError> {
        Self::validate_title(&title)?;
        Self::validate_time_saved(time_saved_estimate)?;

        self.title = title;
        self.description = description;
        self.decision_type = decision_type;
        self.impact_level = impact_level;
        self.principle_applied = principle_applied;
        self.time_saved_estimate = time_saved_estimate;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title exceeds {} characters", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_time_saved(hours: f64) -> Result<(), DomainError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(DomainError::validation(
                "time_saved_estimate",
                "Time saved must be a non-negative number of hours",
            ));
        }
        Ok(())
    }
}

impl OwnedByUser for DecisionEntry {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn valid_entry() -> DecisionEntry {
        DecisionEntry::new(
            DecisionId::new(),
            test_user_id(),
            "Kill the weekly status meeting".to_string(),
            Some("Nobody reads the minutes anyway".to_string()),
            DecisionType::Eliminate,
            ImpactLevel::High,
            Some(Principle::AskWhyBeforeHow),
            2.5,
        )
        .unwrap()
    }

    #[test]
    fn creates_entry_with_valid_input() {
        let entry = valid_entry();
        assert_eq!(entry.title(), "Kill the weekly status meeting");
        assert_eq!(entry.decision_type(), DecisionType::Eliminate);
        assert_eq!(entry.impact_level(), ImpactLevel::High);
        assert_eq!(entry.principle_applied(), Some(Principle::AskWhyBeforeHow));
        assert_eq!(entry.time_saved_estimate(), 2.5);
    }

    #[test]
    fn rejects_empty_title() {
        let result = DecisionEntry::new(
            DecisionId::new(),
            test_user_id(),
            "   ".to_string(),
            None,
            DecisionType::Automate,
            ImpactLevel::Low,
            None,
            0.0,
        );
        assert!(matches!(
            result,
            Err(DomainError { code: ErrorCode::ValidationFailed, .. })
        ));
    }

    #[test]
    fn rejects_negative_time_saved() {
        let result = DecisionEntry::new(
            DecisionId::new(),
            test_user_id(),
            "Automate invoicing".to_string(),
            None,
            DecisionType::Automate,
            ImpactLevel::Medium,
            None,
            -1.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_finite_time_saved() {
        let result = DecisionEntry::new(
            DecisionId::new(),
            test_user_id(),
            "Automate invoicing".to_string(),
            None,
            DecisionType::Automate,
            ImpactLevel::Medium,
            None,
            f64::NAN,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_details_replaces_fields_and_bumps_updated_at() {
        let mut entry = valid_entry();
        let created = *entry.created_at();

        entry
            .update_details(
                "Delegate invoice review".to_string(),
                None,
                DecisionType::Delegate,
                ImpactLevel::Medium,
                None,
                1.0,
            )
            .unwrap();

        assert_eq!(entry.title(), "Delegate invoice review");
        assert_eq!(entry.decision_type(), DecisionType::Delegate);
        assert!(entry.principle_applied().is_none());
        assert_eq!(entry.created_at(), &created);
        assert!(entry.updated_at() >= entry.created_at());
    }

    #[test]
    fn update_rejects_invalid_title() {
        let mut entry = valid_entry();
        let result = entry.update_details(
            "x".repeat(MAX_TITLE_LENGTH + 1),
            None,
            DecisionType::Simplify,
            ImpactLevel::Low,
            None,
            0.0,
        );
        assert!(result.is_err());
        // Unchanged on failure
        assert_eq!(entry.title(), "Kill the weekly status meeting");
    }

    #[test]
    fn ownership_check_enforces_creator() {
        let entry = valid_entry();
        assert!(entry.check_ownership(&test_user_id()).is_ok());
        assert!(entry
            .check_ownership(&UserId::new("someone-else").unwrap())
            .is_err());
    }

    #[test]
    fn decision_type_round_trips_through_str() {
        for dt in DecisionType::ALL {
            assert_eq!(dt.as_str().parse::<DecisionType>().unwrap(), dt);
        }
        assert!("shred".parse::<DecisionType>().is_err());
    }

    #[test]
    fn impact_level_round_trips_through_str() {
        for level in [ImpactLevel::Low, ImpactLevel::Medium, ImpactLevel::High] {
            assert_eq!(level.as_str().parse::<ImpactLevel>().unwrap(), level);
        }
    }

    #[test]
    fn principle_catalog_has_ten_distinct_entries() {
        assert_eq!(Principle::ALL.len(), 10);
        for principle in Principle::ALL {
            assert_eq!(principle.as_str().parse::<Principle>().unwrap(), principle);
            assert!(!principle.name().is_empty());
        }
    }

    #[test]
    fn enums_serialize_as_snake_case_tokens() {
        assert_eq!(
            serde_json::to_string(&DecisionType::Eliminate).unwrap(),
            "\"eliminate\""
        );
        assert_eq!(serde_json::to_string(&ImpactLevel::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Principle::AskWhyBeforeHow).unwrap(),
            "\"ask_why_before_how\""
        );
    }
}
