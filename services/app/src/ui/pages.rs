//! services/app/src/ui/pages.rs
//!
//! Pages with no state of their own: home, about and the profile display.

use cognistack_core::domain::Profile;

use crate::ui::assessment::render_stack;

pub fn render_home() -> String {
    let features = [
        (
            "AI-Powered Analysis",
            "Machine learning algorithms analyze your cognitive patterns with unprecedented accuracy.",
        ),
        (
            "Jungian Framework",
            "Based on Carl Jung's cognitive function theory and modern MBTI research.",
        ),
        (
            "Personality Matching",
            "Discover your compatibility with others and famous personalities.",
        ),
        (
            "Expert Insights",
            "Access articles and blogs from psychology professionals and researchers.",
        ),
    ];

    let mut lines = vec![
        "CogniStack".to_string(),
        "Discover your Jungian cognitive functions and MBTI type.".to_string(),
        "Start Your Journey: type 'test'    Learn More: type 'about'".to_string(),
        String::new(),
        "Why Choose CogniStack?".to_string(),
    ];
    for (title, description) in features {
        lines.push(format!("  * {title}: {description}"));
    }
    lines.push(String::new());
    lines.push("Ready to Understand Yourself? Type 'test' to Take the Assessment".to_string());
    lines.join("\n")
}

pub fn render_about() -> String {
    let faq = [
        (
            "What is CogniStack?",
            "A self-development platform that assesses your Jungian Cognitive Functions and gives insight into your MBTI personality type.",
        ),
        (
            "What are Cognitive Functions?",
            "Mental processes identified by Carl Jung that describe how we perceive and process information. There are 8 functions: Ne, Ni, Se, Si (perceiving) and Te, Ti, Fe, Fi (judging). Each person has a unique 'stack' of 4 functions that determine their personality type.",
        ),
        (
            "Is my data secure?",
            "Assessment answers live only for the current session and are never stored.",
        ),
    ];

    let mut lines = vec![
        "About CogniStack".to_string(),
        String::new(),
        "The Science Behind CogniStack".to_string(),
        "  Jungian Foundation: 8 cognitive functions theory, psychological type dynamics, shadow function development".to_string(),
        String::new(),
        "Frequently Asked Questions".to_string(),
    ];
    for (question, answer) in faq {
        lines.push(format!("  Q: {question}"));
        lines.push(format!("     {answer}"));
    }
    lines.join("\n")
}

pub fn render_profile(profile: &Profile) -> String {
    let ty = profile.mbti_type;
    let mut lines = vec![
        format!("{} ({})", profile.name, profile.handle),
        profile.email.clone(),
        format!("{ty} - {}", ty.nickname()),
        String::new(),
        "Cognitive Function Stack".to_string(),
    ];
    lines.extend(render_stack(&profile.stack));

    lines.push(String::new());
    lines.push(format!("Famous {ty}s"));
    for person in &profile.famous_personalities {
        lines.push(format!("  {} - {}", person.name, person.profession));
    }

    lines.push(String::new());
    lines.push("Type Compatibility".to_string());
    for entry in &profile.compatibility {
        lines.push(format!(
            "  {} {:>3}% {}",
            entry.mbti_type, entry.percent, entry.relationship
        ));
    }
    lines.join("\n")
}
