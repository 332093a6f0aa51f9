//! Automation recipe entity with visibility and search rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    AutomationId, DomainError, OwnedByUser, Timestamp, UserId, ValidationError,
};

use crate::domain::decision::MAX_TITLE_LENGTH;

/// Area of work the automation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationCategory {
    Process,
    Communication,
    Data,
    Development,
    Marketing,
}

impl AutomationCategory {
    /// All categories, in display order.
    pub const ALL: [AutomationCategory; 5] = [
        AutomationCategory::Process,
        AutomationCategory::Communication,
        AutomationCategory::Data,
        AutomationCategory::Development,
        AutomationCategory::Marketing,
    ];

    /// Stable token used in the API and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationCategory::Process => "process",
            AutomationCategory::Communication => "communication",
            AutomationCategory::Data => "data",
            AutomationCategory::Development => "development",
            AutomationCategory::Marketing => "marketing",
        }
    }
}

impl fmt::Display for AutomationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AutomationCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AutomationCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown category '{}'", s))
            })
    }
}

/// How hard the automation is to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(DifficultyLevel::Easy),
            "medium" => Ok(DifficultyLevel::Medium),
            "hard" => Ok(DifficultyLevel::Hard),
            other => Err(ValidationError::invalid_format(
                "difficulty_level",
                format!("unknown level '{}'", other),
            )),
        }
    }
}

/// A shared automation recipe.
///
/// Visible to its creator always; visible to everyone else only when
/// `is_public` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationEntry {
    id: AutomationId,
    created_by: UserId,
    title: String,
    description: Option<String>,
    category: AutomationCategory,
    difficulty_level: DifficultyLevel,
    /// Hours needed to build the automation.
    time_to_implement: f64,
    /// Hours saved per week once built.
    hours_saved: f64,
    tools_used: Option<String>,
    steps_description: Option<String>,
    is_public: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AutomationEntry {
    /// Creates a new recipe.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty/too long or either
    ///   hour figure is negative or not finite
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AutomationId,
        created_by: UserId,
        title: String,
        description: Option<String>,
        category: AutomationCategory,
        difficulty_level: DifficultyLevel,
        time_to_implement: f64,
        hours_saved: f64,
        tools_used: Option<String>,
        steps_description: Option<String>,
        is_public: bool,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_hours("time_to_implement", time_to_implement)?;
        Self::validate_hours("hours_saved", hours_saved)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            created_by,
            title,
            description,
            category,
            difficulty_level,
            time_to_implement,
            hours_saved,
            tools_used,
            steps_description,
            is_public,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a recipe from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: AutomationId,
        created_by: UserId,
        title: String,
        description: Option<String>,
        category: AutomationCategory,
        difficulty_level: DifficultyLevel,
        time_to_implement: f64,
        hours_saved: f64,
        tools_used: Option<String>,
        steps_description: Option<String>,
        is_public: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            created_by,
            title,
            description,
            category,
            difficulty_level,
            time_to_implement,
            hours_saved,
            tools_used,
            steps_description,
            is_public,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &AutomationId {
        &self.id
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> AutomationCategory {
        self.category
    }

    pub fn difficulty_level(&self) -> DifficultyLevel {
        self.difficulty_level
    }

    pub fn time_to_implement(&self) -> f64 {
        self.time_to_implement
    }

    pub fn hours_saved(&self) -> f64 {
        self.hours_saved
    }

    pub fn tools_used(&self) -> Option<&str> {
        self.tools_used.as_deref()
    }

    pub fn steps_description(&self) -> Option<&str> {
        self.steps_description.as_deref()
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Whether the given user may read this recipe.
    pub fn is_visible_to(&self, user_id: &UserId) -> bool {
        self.is_public || &self.created_by == user_id
    }

    /// Case-insensitive substring match against title, description, and
    /// tools; any one field matching is sufficient. An empty term matches.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        let haystacks = [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.tools_used.as_deref(),
        ];

        haystacks
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&term))
    }

    /// Replaces the mutable fields of the recipe.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` on the same rules as [`AutomationEntry::new`]
    #[allow(clippy::too_many_arguments)]
    pub fn update_details(
        &mut self,
        title: String,
        description: Option<String>,
        category: AutomationCategory,
        difficulty_level: DifficultyLevel,
        time_to_implement: f64,
        hours_saved: f64,
        tools_used: Option<String>,
        steps_description: Option<String>,
        is_public: bool,
    ) -> Result<(), DomainError> {
        Self::validate_title(&title)?;
        Self::validate_hours("time_to_implement", time_to_implement)?;
        Self::validate_hours("hours_saved", hours_saved)?;

        self.title = title;
        self.description = description;
        self.category = category;
        self.difficulty_level = difficulty_level;
        self.time_to_implement = time_to_implement;
        self.hours_saved = hours_saved;
        self.tools_used = tools_used;
        self.steps_description = steps_description;
        self.is_public = is_public;
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

    fn validate_hours(field: &str, hours: f64) -> Result<(), DomainError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(DomainError::validation(
                field,
                "Hours must be a non-negative number",
            ));
        }
        Ok(())
    }
}

impl OwnedByUser for AutomationEntry {
    fn owner_id(&self) -> &UserId {
        &self.created_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new("owner-1").unwrap()
    }

    fn other() -> UserId {
        UserId::new("other-2").unwrap()
    }

    fn recipe(is_public: bool) -> AutomationEntry {
        AutomationEntry::new(
            AutomationId::new(),
            owner(),
            "Weekly report generator".to_string(),
            Some("Builds the Monday report from the tracker export".to_string()),
            AutomationCategory::Data,
            DifficultyLevel::Medium,
            4.0,
            1.5,
            Some("Python, Google Sheets".to_string()),
            Some("Export tracker, run the script, paste the summary".to_string()),
            is_public,
        )
        .unwrap()
    }

    #[test]
    fn creates_recipe_with_valid_input() {
        let entry = recipe(true);
        assert_eq!(entry.title(), "Weekly report generator");
        assert_eq!(entry.category(), AutomationCategory::Data);
        assert_eq!(entry.difficulty_level(), DifficultyLevel::Medium);
        assert!(entry.is_public());
    }

    #[test]
    fn rejects_empty_title() {
        let result = AutomationEntry::new(
            AutomationId::new(),
            owner(),
            "".to_string(),
            None,
            AutomationCategory::Process,
            DifficultyLevel::Easy,
            0.0,
            0.0,
            None,
            None,
            true,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_hours() {
        let result = AutomationEntry::new(
            AutomationId::new(),
            owner(),
            "Broken".to_string(),
            None,
            AutomationCategory::Process,
            DifficultyLevel::Easy,
            -1.0,
            0.0,
            None,
            None,
            true,
        );
        assert!(result.is_err());
    }

    #[test]
    fn public_recipe_is_visible_to_everyone() {
        let entry = recipe(true);
        assert!(entry.is_visible_to(&owner()));
        assert!(entry.is_visible_to(&other()));
    }

    #[test]
    fn private_recipe_is_visible_only_to_owner() {
        let entry = recipe(false);
        assert!(entry.is_visible_to(&owner()));
        assert!(!entry.is_visible_to(&other()));
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let entry = recipe(true);
        assert!(entry.matches_search("WEEKLY"));
        assert!(entry.matches_search("report gen"));
    }

    #[test]
    fn search_matches_description_and_tools() {
        let entry = recipe(true);
        assert!(entry.matches_search("monday"));
        assert!(entry.matches_search("python"));
    }

    #[test]
    fn search_misses_when_no_field_contains_term() {
        let entry = recipe(true);
        assert!(!entry.matches_search("zapier"));
    }

    #[test]
    fn empty_search_matches_everything() {
        let entry = recipe(true);
        assert!(entry.matches_search(""));
        assert!(entry.matches_search("   "));
    }

    #[test]
    fn search_handles_missing_optional_fields() {
        let entry = AutomationEntry::new(
            AutomationId::new(),
            owner(),
            "Inbox rules".to_string(),
            None,
            AutomationCategory::Communication,
            DifficultyLevel::Easy,
            0.5,
            1.0,
            None,
            None,
            true,
        )
        .unwrap();

        assert!(entry.matches_search("inbox"));
        assert!(!entry.matches_search("python"));
    }

    #[test]
    fn update_details_replaces_fields() {
        let mut entry = recipe(true);
        entry
            .update_details(
                "Nightly backup".to_string(),
                None,
                AutomationCategory::Development,
                DifficultyLevel::Hard,
                8.0,
                0.5,
                Some("cron, rsync".to_string()),
                None,
                false,
            )
            .unwrap();

        assert_eq!(entry.title(), "Nightly backup");
        assert_eq!(entry.category(), AutomationCategory::Development);
        assert!(!entry.is_public());
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in AutomationCategory::ALL {
            assert_eq!(
                category.as_str().parse::<AutomationCategory>().unwrap(),
                category
            );
        }
        assert!("finance".parse::<AutomationCategory>().is_err());
    }

    #[test]
    fn difficulty_round_trips_through_str() {
        for level in [DifficultyLevel::Easy, DifficultyLevel::Medium, DifficultyLevel::Hard] {
            assert_eq!(level.as_str().parse::<DifficultyLevel>().unwrap(), level);
        }
    }

    #[test]
    fn ownership_uses_created_by() {
        let entry = recipe(false);
        assert!(entry.check_ownership(&owner()).is_ok());
        assert!(entry.check_ownership(&other()).is_err());
    }
}
