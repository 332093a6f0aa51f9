//! The fixed catalog of workaholism symptoms.
//!
//! The questionnaire is a closed list: ten statements, each answered with
//! "yes, that's me" or "no". Clients fetch this catalog instead of
//! duplicating the content.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Number of items in the questionnaire.
pub const SYMPTOM_COUNT: usize = 10;

/// One symptom statement presented to the respondent.
#[derive(Debug, Clone, Serialize)]
pub struct Symptom {
    /// Stable item id, 1-based.
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Phrases a respondent might recognize themselves in.
    pub examples: &'static [&'static str],
}

static SYMPTOMS: Lazy<Vec<Symptom>> = Lazy::new(|| {
    vec![
        Symptom {
            id: 1,
            title: "You Compete in Suffering",
            description: "Talks about sleeping little, skipping lunch, working weekends as a badge of honor",
            examples: &[
                "I slept three hours last night",
                "I skipped lunch today, too busy",
                "I haven't taken a weekend off in six months",
            ],
        },
        Symptom {
            id: 2,
            title: "You Confuse Presence with Value",
            description: "Measures worth by the number of hours visible to others",
            examples: &[
                "John is always online on Slack",
                "Maria never leaves before 7pm",
                "Pedro answers email in the middle of the night",
            ],
        },
        Symptom {
            id: 3,
            title: "You Take Pride in Having No Life",
            description: "Brags about never taking vacations and always working",
            examples: &[
                "I haven't taken a vacation in two years",
                "I work even on weekends",
                "My family is used to me never being around",
            ],
        },
        Symptom {
            id: 4,
            title: "You Use 'No Time' as a Universal Excuse",
            description: "Avoids thinking deeply by blaming lack of time",
            examples: &[
                "I don't have time to think about that",
                "I don't have time to automate",
                "I don't have time to question whether this makes sense",
            ],
        },
        Symptom {
            id: 5,
            title: "You Measure Success by Input, Not Output",
            description: "Focuses on activity performed instead of results produced",
            examples: &[
                "I sent 150 emails today",
                "I sat through eight meetings",
                "I worked twelve hours",
            ],
        },
        Symptom {
            id: 6,
            title: "You Avoid Automation",
            description: "Prefers doing repetitive tasks by hand",
            examples: &[
                "It's faster to just do it manually",
                "Not worth automating something this simple",
                "I already know how to do it, why complicate things?",
            ],
        },
        Symptom {
            id: 7,
            title: "You Are Addicted to Urgency",
            description: "Everything is urgent and high priority, always reacting",
            examples: &[
                "Everything was due yesterday",
                "Always in firefighting mode",
                "Can't plan because everything is urgent",
            ],
        },
        Symptom {
            id: 8,
            title: "You Romanticize Sacrifice",
            description: "Believes suffering is necessary for success",
            examples: &[
                "Entrepreneurship demands sacrifice",
                "Success has a price",
                "Nothing of value comes easy",
            ],
        },
        Symptom {
            id: 9,
            title: "You Are Allergic to Simplification",
            description: "Complexity has become a symbol of intellectual status",
            examples: &[
                "It can't be that simple",
                "If it were easy, everyone would do it",
                "There must be a catch",
            ],
        },
        Symptom {
            id: 10,
            title: "You Compete for Recognition of Effort",
            description: "Needs others to see the effort in order to feel valued",
            examples: &[
                "Nobody sees how much I work",
                "They don't recognize my dedication",
                "I do everything here and nobody appreciates it",
            ],
        },
    ]
});

/// Returns the fixed, ordered symptom catalog.
pub fn symptom_catalog() -> &'static [Symptom] {
    &SYMPTOMS
}
