//! crates/cognistack_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::mbti::{CognitiveFunction, MbtiType, Preference};

pub type PostId = u32;
pub type QuestionId = u32;

//=========================================================================================
// Blog Catalog
//=========================================================================================

/// The closed set of blog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    CognitiveFunctions,
    CareerDevelopment,
    JungianPsychology,
    Relationships,
    PsychologyHistory,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CognitiveFunctions,
        Category::CareerDevelopment,
        Category::JungianPsychology,
        Category::Relationships,
        Category::PsychologyHistory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CognitiveFunctions => "Cognitive Functions",
            Category::CareerDevelopment => "Career Development",
            Category::JungianPsychology => "Jungian Psychology",
            Category::Relationships => "Relationships",
            Category::PsychologyHistory => "Psychology History",
        }
    }

    /// Exact label lookup, the inverse of [`Category::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl Author {
    /// First letter of every word of the name, e.g. "Dr. Sarah Chen" -> "DSC".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// A blog article. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub author: Author,
    pub category: Category,
    pub read_time_minutes: u32,
    pub published_on: NaiveDate,
}

//=========================================================================================
// Assessment
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub multiple_choice: bool,
    /// One preference letter per option, used by tally scoring. Empty when unscored.
    pub option_keys: Vec<Preference>,
}

impl Question {
    pub fn key_for(&self, option: &str) -> Option<Preference> {
        let index = self.options.iter().position(|o| o == option)?;
        self.option_keys.get(index).copied()
    }
}

/// A recorded answer. The variant always agrees with the question's
/// `multiple_choice` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Multiple(BTreeSet<String>),
}

impl Answer {
    /// An empty string or an empty set counts as unanswered.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Single(value) => value.is_empty(),
            Answer::Multiple(values) => values.is_empty(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Answer::Multiple(_))
    }

    pub fn contains(&self, option: &str) -> bool {
        match self {
            Answer::Single(value) => value == option,
            Answer::Multiple(values) => values.contains(option),
        }
    }

    /// Iterates over every selected option.
    pub fn selections(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Answer::Single(value) => Box::new(std::iter::once(value.as_str())),
            Answer::Multiple(values) => Box::new(values.iter().map(String::as_str)),
        }
    }
}

pub type AnswerMap = BTreeMap<QuestionId, Answer>;

/// One entry of a cognitive function stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionStrength {
    pub function: CognitiveFunction,
    /// Percent, 0..=100.
    pub strength: u8,
}

/// What a scoring backend hands back for a completed answer map.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResult {
    pub mbti_type: MbtiType,
    pub confidence: f32,
    pub breakdown: BTreeMap<Preference, f32>,
    /// Ordered dominant, auxiliary, tertiary, inferior.
    pub stack: Vec<FunctionStrength>,
}

//=========================================================================================
// Profile
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamousPersonality {
    pub name: String,
    pub profession: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compatibility {
    pub mbti_type: MbtiType,
    pub percent: u8,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub email: String,
    pub mbti_type: MbtiType,
    pub stack: Vec<FunctionStrength>,
    pub famous_personalities: Vec<FamousPersonality>,
    pub compatibility: Vec<Compatibility>,
}

//=========================================================================================
// Identity
//=========================================================================================

// Only used at the identity provider boundary - contains sensitive data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

// Represents a signed-in session handed back by an identity provider
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_initials_take_first_letter_of_each_word() {
        let author = Author {
            name: "Prof. David Miller".to_string(),
            avatar_url: None,
        };
        assert_eq!(author.initials(), "PDM");
    }

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("relationships"), None);
    }

    #[test]
    fn empty_answers_count_as_unanswered() {
        assert!(Answer::Single(String::new()).is_empty());
        assert!(Answer::Multiple(BTreeSet::new()).is_empty());
        assert!(!Answer::Single("a".to_string()).is_empty());
    }
}
