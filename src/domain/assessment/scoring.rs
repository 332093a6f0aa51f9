//! Score computation and band classification.
//!
//! The score is the fraction of "healthy" answers (symptom not present)
//! expressed as a percentage, rounded to the nearest integer. Fewer
//! symptoms means a higher Smart Laziness score.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

/// Computes the score for `symptoms_present` out of `total` answered items.
///
/// Returns `Score::ZERO` when `total` is 0 rather than dividing by zero.
pub fn compute_score(total: usize, symptoms_present: usize) -> Score {
    if total == 0 {
        return Score::ZERO;
    }
    let healthy = total.saturating_sub(symptoms_present);
    let raw = (healthy as f64 / total as f64) * 100.0;
    Score::new(raw.round() as u8)
}

/// Score band, from worst to best.
///
/// The three bands are closed, non-overlapping, and cover [0,100]:
/// below 60, 60 to 79, and 80 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    UnintelligentlyLazy,
    InTransition,
    SmartLazy,
}

impl ScoreBand {
    /// Classifies a score into its band.
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            80..=100 => ScoreBand::SmartLazy,
            60..=79 => ScoreBand::InTransition,
            _ => ScoreBand::UnintelligentlyLazy,
        }
    }

    /// Human-readable label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::SmartLazy => "Smart-Lazy",
            ScoreBand::InTransition => "In Transition",
            ScoreBand::UnintelligentlyLazy => "Unintelligently Lazy",
        }
    }

    /// One-line interpretation of the band.
    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::SmartLazy => {
                "Congratulations! You understand that efficiency beats effort. Keep applying the principles."
            }
            ScoreBand::InTransition => {
                "You are on the right track, but still have some workaholic habits to eliminate."
            }
            ScoreBand::UnintelligentlyLazy => {
                "You are still stuck in the old model. Time to rethink your approach to work."
            }
        }
    }

    /// Fixed recommendation list for this band.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            ScoreBand::SmartLazy => &[
                "Share your best automations with the team",
                "Delegate one task that only you know how to do",
                "Mentor a colleague through their first automation",
                "Keep logging decisions to protect your gains",
            ],
            ScoreBand::InTransition => &[
                "Start logging your daily decisions",
                "Identify one task to automate this week",
                "Practice saying no to one thing today",
                "Ask \"why am I doing this?\" before executing",
            ],
            ScoreBand::UnintelligentlyLazy => &[
                "Question the purpose of every recurring task before doing it",
                "Cancel or shorten one standing meeting this week",
                "Stop treating busyness as an achievement",
                "Pick a single repetitive task and automate it",
            ],
        }
    }
}
