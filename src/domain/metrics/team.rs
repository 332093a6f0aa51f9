//! Team-wide metrics computed from profile scores and automation rows.
//!
//! Aggregation is pure: the reader port fetches the raw rows and this
//! module reduces them. Consistency is best-effort, read at request time.

use serde::Serialize;

use crate::domain::assessment::ScoreBand;
use crate::domain::automation::AutomationCategory;
use crate::domain::foundation::{Score, UserId};

/// Number of users kept in the top automators ranking.
const TOP_AUTOMATORS: usize = 5;

/// One automation row, reduced to the fields the aggregation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomationStatRow {
    pub created_by: UserId,
    pub category: AutomationCategory,
    pub hours_saved: f64,
}

/// Histogram of scores over the three bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    pub unintelligently_lazy: usize,
    pub in_transition: usize,
    pub smart_lazy: usize,
}

/// Automation count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: AutomationCategory,
    pub count: usize,
}

/// One entry in the top automators ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatorRank {
    pub user_id: UserId,
    pub automation_count: usize,
}

/// The full team metrics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMetrics {
    pub user_count: usize,
    /// Mean score rounded to an integer; 0 when there are no users.
    pub average_score: Score,
    pub total_automations: usize,
    pub total_hours_saved: f64,
    pub score_distribution: ScoreDistribution,
    /// Counts in first-seen category order.
    pub automations_by_category: Vec<CategoryCount>,
    /// Up to five users by automation count, ties in first-seen order.
    pub top_automators: Vec<AutomatorRank>,
}

impl TeamMetrics {
    /// Reduces raw rows into the metrics snapshot.
    pub fn compute(scores: &[Score], automations: &[AutomationStatRow]) -> Self {
        let user_count = scores.len();
        let average_score = if user_count == 0 {
            Score::ZERO
        } else {
            let sum: u32 = scores.iter().map(|s| s.value() as u32).sum();
            Score::new((sum as f64 / user_count as f64).round() as u8)
        };

        let mut score_distribution = ScoreDistribution::default();
        for score in scores {
            match ScoreBand::for_score(*score) {
                ScoreBand::UnintelligentlyLazy => score_distribution.unintelligently_lazy += 1,
                ScoreBand::InTransition => score_distribution.in_transition += 1,
                ScoreBand::SmartLazy => score_distribution.smart_lazy += 1,
            }
        }

        let total_automations = automations.len();
        let total_hours_saved: f64 = automations.iter().map(|row| row.hours_saved).sum();

        let mut automations_by_category: Vec<CategoryCount> = Vec::new();
        for row in automations {
            match automations_by_category
                .iter_mut()
                .find(|c| c.category == row.category)
            {
                Some(existing) => existing.count += 1,
                None => automations_by_category.push(CategoryCount {
                    category: row.category,
                    count: 1,
                }),
            }
        }

        let mut counts_by_user: Vec<AutomatorRank> = Vec::new();
        for row in automations {
            match counts_by_user
                .iter_mut()
                .find(|r| r.user_id == row.created_by)
            {
                Some(existing) => existing.automation_count += 1,
                None => counts_by_user.push(AutomatorRank {
                    user_id: row.created_by.clone(),
                    automation_count: 1,
                }),
            }
        }
        // Stable sort keeps first-seen order between equal counts.
        counts_by_user.sort_by(|a, b| b.automation_count.cmp(&a.automation_count));
        counts_by_user.truncate(TOP_AUTOMATORS);

        Self {
            user_count,
            average_score,
            total_automations,
            total_hours_saved,
            score_distribution,
            automations_by_category,
            top_automators: counts_by_user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn row(created_by: &str, category: AutomationCategory, hours_saved: f64) -> AutomationStatRow {
        AutomationStatRow {
            created_by: user(created_by),
            category,
            hours_saved,
        }
    }

    #[test]
    fn empty_inputs_yield_zeroed_metrics() {
        let metrics = TeamMetrics::compute(&[], &[]);

        assert_eq!(metrics.user_count, 0);
        assert_eq!(metrics.average_score, Score::ZERO);
        assert_eq!(metrics.total_automations, 0);
        assert_eq!(metrics.total_hours_saved, 0.0);
        assert_eq!(metrics.score_distribution, ScoreDistribution::default());
        assert!(metrics.automations_by_category.is_empty());
        assert!(metrics.top_automators.is_empty());
    }

    #[test]
    fn average_score_rounds_to_nearest_integer() {
        let scores = [Score::new(70), Score::new(75)];
        let metrics = TeamMetrics::compute(&scores, &[]);
        // 72.5 rounds half up like the original
        assert_eq!(metrics.average_score.value(), 73);
    }

    #[test]
    fn score_distribution_uses_band_thresholds() {
        let scores = [
            Score::new(0),
            Score::new(59),
            Score::new(60),
            Score::new(79),
            Score::new(80),
            Score::new(100),
        ];
        let metrics = TeamMetrics::compute(&scores, &[]);

        assert_eq!(metrics.score_distribution.unintelligently_lazy, 2);
        assert_eq!(metrics.score_distribution.in_transition, 2);
        assert_eq!(metrics.score_distribution.smart_lazy, 2);
    }

    #[test]
    fn totals_sum_over_all_rows() {
        let rows = [
            row("a", AutomationCategory::Process, 2.0),
            row("b", AutomationCategory::Data, 3.5),
            row("a", AutomationCategory::Process, 0.5),
        ];
        let metrics = TeamMetrics::compute(&[], &rows);

        assert_eq!(metrics.total_automations, 3);
        assert_eq!(metrics.total_hours_saved, 6.0);
    }

    #[test]
    fn categories_count_in_first_seen_order() {
        let rows = [
            row("a", AutomationCategory::Data, 1.0),
            row("b", AutomationCategory::Process, 1.0),
            row("c", AutomationCategory::Data, 1.0),
        ];
        let metrics = TeamMetrics::compute(&[], &rows);

        assert_eq!(
            metrics.automations_by_category,
            vec![
                CategoryCount { category: AutomationCategory::Data, count: 2 },
                CategoryCount { category: AutomationCategory::Process, count: 1 },
            ]
        );
    }

    #[test]
    fn top_automators_ranked_by_count() {
        let rows = [
            row("a", AutomationCategory::Process, 1.0),
            row("b", AutomationCategory::Process, 1.0),
            row("b", AutomationCategory::Data, 1.0),
            row("c", AutomationCategory::Data, 1.0),
            row("b", AutomationCategory::Marketing, 1.0),
        ];
        let metrics = TeamMetrics::compute(&[], &rows);

        assert_eq!(metrics.top_automators[0].user_id, user("b"));
        assert_eq!(metrics.top_automators[0].automation_count, 3);
        // "a" and "c" tie at 1; first-seen order is preserved
        assert_eq!(metrics.top_automators[1].user_id, user("a"));
        assert_eq!(metrics.top_automators[2].user_id, user("c"));
    }

    #[test]
    fn top_automators_is_capped_at_five() {
        let rows: Vec<AutomationStatRow> = (0..8)
            .map(|i| row(&format!("user-{}", i), AutomationCategory::Process, 1.0))
            .collect();
        let metrics = TeamMetrics::compute(&[], &rows);

        assert_eq!(metrics.top_automators.len(), 5);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let metrics = TeamMetrics::compute(
            &[Score::new(90)],
            &[row("a", AutomationCategory::Process, 2.0)],
        );
        let json = serde_json::to_value(&metrics).unwrap();

        assert_eq!(json["user_count"], 1);
        assert_eq!(json["average_score"], 90);
        assert_eq!(json["score_distribution"]["smart_lazy"], 1);
        assert_eq!(json["automations_by_category"][0]["category"], "process");
    }
}
