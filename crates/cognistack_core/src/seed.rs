//! crates/cognistack_core/src/seed.rs
//!
//! The built-in content the product ships with: six blog posts, three sample
//! assessment questions and the demo profile.

use chrono::NaiveDate;

use crate::domain::{
    Author, Category, Compatibility, FamousPersonality, FunctionStrength, Post, Profile, Question,
};
use crate::mbti::{CognitiveFunction, MbtiType, Preference};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn post(
    id: u32,
    title: &str,
    excerpt: &str,
    author: &str,
    category: Category,
    read_time_minutes: u32,
    published_on: NaiveDate,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: Author {
            name: author.to_string(),
            avatar_url: None,
        },
        category,
        read_time_minutes,
        published_on,
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        post(
            1,
            "Understanding Your Dominant Cognitive Function",
            "Explore how your dominant function shapes your personality and decision-making process in daily life.",
            "Dr. Sarah Chen",
            Category::CognitiveFunctions,
            8,
            date(2024, 1, 15),
        ),
        post(
            2,
            "MBTI and Career Success: Finding Your Path",
            "Discover how understanding your MBTI type can guide you toward a fulfilling career that matches your natural strengths.",
            "Michael Rodriguez",
            Category::CareerDevelopment,
            12,
            date(2024, 1, 10),
        ),
        post(
            3,
            "The Shadow Functions: Your Hidden Potential",
            "Jung's concept of shadow functions and how developing them can lead to personal growth and better relationships.",
            "Dr. Emily Watson",
            Category::JungianPsychology,
            15,
            date(2024, 1, 8),
        ),
        post(
            4,
            "Introverted vs Extraverted Thinking",
            "A deep dive into the differences between Ti and Te, and how these functions manifest in different personality types.",
            "James Thompson",
            Category::CognitiveFunctions,
            10,
            date(2024, 1, 5),
        ),
        post(
            5,
            "Building Better Relationships Through Type Compatibility",
            "Learn how understanding cognitive functions can improve your relationships and communication with others.",
            "Dr. Lisa Park",
            Category::Relationships,
            7,
            date(2024, 1, 3),
        ),
        post(
            6,
            "The Evolution of Personality Theory",
            "From Jung to Myers-Briggs to modern cognitive function theory - a historical perspective on personality psychology.",
            "Prof. David Miller",
            Category::PsychologyHistory,
            20,
            date(2024, 1, 1),
        ),
    ]
}

fn question(
    id: u32,
    text: &str,
    options: [&str; 4],
    keys: [Preference; 4],
    multiple_choice: bool,
) -> Question {
    Question {
        id,
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        multiple_choice,
        option_keys: keys.to_vec(),
    }
}

pub fn sample_questions() -> Vec<Question> {
    use Preference::*;
    vec![
        question(
            1,
            "When making decisions, you primarily rely on:",
            [
                "Logical analysis and objective facts",
                "Personal values and how it affects others",
                "Past experiences and proven methods",
                "Future possibilities and innovative approaches",
            ],
            [T, F, S, N],
            false,
        ),
        question(
            2,
            "In social situations, you tend to:",
            [
                "Seek out new people and conversations",
                "Prefer intimate conversations with close friends",
                "Observe first before participating",
                "Take charge and organize activities",
            ],
            [E, I, I, J],
            false,
        ),
        question(
            3,
            "Which activities energize you most? (You can choose multiple answers)",
            [
                "Brainstorming creative solutions",
                "Helping others solve problems",
                "Working alone on detailed tasks",
                "Leading team projects",
            ],
            [P, F, I, E],
            true,
        ),
    ]
}

fn strength(function: CognitiveFunction, strength: u8) -> FunctionStrength {
    FunctionStrength { function, strength }
}

/// The cognitive stack shown for the hardcoded ENFP result.
pub fn enfp_stack() -> Vec<FunctionStrength> {
    use CognitiveFunction::*;
    vec![
        strength(Ne, 95),
        strength(Fi, 88),
        strength(Te, 45),
        strength(Si, 25),
    ]
}

pub fn sample_profile() -> Profile {
    let famous = [
        ("Robin Williams", "Actor/Comedian"),
        ("Walt Disney", "Entrepreneur"),
        ("Mark Twain", "Writer"),
        ("Ellen DeGeneres", "TV Host"),
    ];
    let compatibility = [
        ("INFJ", 95, "Ideal Match"),
        ("INTJ", 88, "Great Friend"),
        ("ENFJ", 82, "Good Partner"),
        ("ENTP", 75, "Fun Companion"),
    ];

    Profile {
        name: "Alex Thompson".to_string(),
        handle: "@alexthompson".to_string(),
        email: "alex@example.com".to_string(),
        mbti_type: MbtiType::ENFP,
        stack: enfp_stack(),
        famous_personalities: famous
            .iter()
            .map(|(name, profession)| FamousPersonality {
                name: name.to_string(),
                profession: profession.to_string(),
            })
            .collect(),
        compatibility: compatibility
            .iter()
            .filter_map(|(code, percent, relationship)| {
                Some(Compatibility {
                    mbti_type: code.parse().ok()?,
                    percent: *percent,
                    relationship: relationship.to_string(),
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_has_one_key_per_option() {
        for q in sample_questions() {
            assert_eq!(q.options.len(), q.option_keys.len(), "question {}", q.id);
        }
    }

    #[test]
    fn post_ids_are_unique() {
        let posts = sample_posts();
        let mut ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn enfp_stack_matches_type_theory() {
        let derived = MbtiType::ENFP.cognitive_stack();
        let fixed: Vec<_> = enfp_stack().iter().map(|s| s.function).collect();
        assert_eq!(fixed, derived.to_vec());
    }

    #[test]
    fn profile_lists_four_compatible_types() {
        assert_eq!(sample_profile().compatibility.len(), 4);
    }
}
