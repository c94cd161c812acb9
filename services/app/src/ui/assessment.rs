//! services/app/src/ui/assessment.rs
//!
//! The "Take Test" page: drives the walkthrough from option numbers typed by the
//! user and shows the scored result once the last question is done.

use std::collections::BTreeSet;

use cognistack_core::{
    domain::{Answer, AssessmentResult, FunctionStrength, Question, QuestionId},
    walkthrough::{Phase, Walkthrough},
};

const POSITIONS: [&str; 4] = ["Dominant", "Auxiliary", "Tertiary", "Inferior"];

/// Why an option command did nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("the assessment is not in progress")]
    NotInProgress,
    #[error("this question has no option {0}")]
    NoSuchOption(usize),
    #[error("this question allows multiple answers, use 'toggle'")]
    UseToggle,
    #[error("this question takes a single answer, use 'choose'")]
    UseChoose,
    #[error("the answer was not accepted for this question")]
    Rejected,
}

pub struct AssessmentPage {
    walkthrough: Walkthrough,
    result: Option<Result<AssessmentResult, String>>,
}

impl AssessmentPage {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            walkthrough: Walkthrough::new(questions),
            result: None,
        }
    }

    pub fn walkthrough(&self) -> &Walkthrough {
        &self.walkthrough
    }

    pub fn begin(&mut self) -> bool {
        self.walkthrough.begin()
    }

    /// A fresh walkthrough over the same questions.
    pub fn restart(&mut self) {
        self.walkthrough = Walkthrough::new(self.walkthrough.questions().to_vec());
        self.result = None;
    }

    fn current_option(&self, number: usize) -> Result<(&Question, &str), SelectionError> {
        let question = self
            .walkthrough
            .current_question()
            .ok_or(SelectionError::NotInProgress)?;
        let option = number
            .checked_sub(1)
            .and_then(|i| question.options.get(i))
            .ok_or(SelectionError::NoSuchOption(number))?;
        Ok((question, option))
    }

    /// Selects option `number` of the current single-select question.
    pub fn choose(&mut self, number: usize) -> Result<(), SelectionError> {
        let (question, option) = self.current_option(number)?;
        if question.multiple_choice {
            return Err(SelectionError::UseToggle);
        }
        let (id, answer) = (question.id, Answer::Single(option.to_string()));
        self.record(id, answer)
    }

    /// Flips option `number` of the current multi-select question. The new set is
    /// computed here and handed to the walkthrough as a full replacement.
    pub fn toggle(&mut self, number: usize) -> Result<(), SelectionError> {
        let (question, option) = self.current_option(number)?;
        if !question.multiple_choice {
            return Err(SelectionError::UseChoose);
        }
        let mut selected: BTreeSet<String> = match self.walkthrough.answer_for(question.id) {
            Some(Answer::Multiple(set)) => set.clone(),
            _ => BTreeSet::new(),
        };
        if !selected.remove(option) {
            selected.insert(option.to_string());
        }
        let id = question.id;
        self.record(id, Answer::Multiple(selected))
    }

    fn record(&mut self, id: QuestionId, answer: Answer) -> Result<(), SelectionError> {
        if self.walkthrough.record_answer(id, answer) {
            Ok(())
        } else {
            Err(SelectionError::Rejected)
        }
    }

    /// Presses the next/complete button. Returns whether the walkthrough moved.
    pub fn next(&mut self) -> bool {
        self.walkthrough.advance()
    }

    pub fn needs_scoring(&self) -> bool {
        self.walkthrough.is_complete() && self.result.is_none()
    }

    pub fn set_result(&mut self, result: Result<AssessmentResult, String>) {
        self.result = Some(result);
    }

    pub fn render(&self) -> String {
        match self.walkthrough.phase() {
            Phase::NotStarted => render_intro(self.walkthrough.question_count()),
            Phase::InProgress(_) => self.render_question(),
            Phase::Complete => match &self.result {
                Some(Ok(result)) => render_result(result),
                Some(Err(reason)) => format!(
                    "Assessment complete\nYour result could not be computed: {reason}"
                ),
                None => "Assessment complete\nCalculating your result...".to_string(),
            },
        }
    }

    fn render_question(&self) -> String {
        let w = &self.walkthrough;
        let (Some(question), Some((number, total))) = (w.current_question(), w.position()) else {
            return String::new();
        };
        let percent = w.progress_percent();
        let answer = w.answer_for(question.id);

        let mut lines = vec![
            format!("Question {number} of {total}    {}% Complete", percent.round()),
            bar(percent.round() as u8),
            String::new(),
            question.text.clone(),
        ];
        if question.multiple_choice {
            lines.push("(Multiple answers allowed)".to_string());
        }
        for (i, option) in question.options.iter().enumerate() {
            let picked = answer.is_some_and(|a| a.contains(option));
            let mark = match (question.multiple_choice, picked) {
                (true, true) => "[x]",
                (true, false) => "[ ]",
                (false, true) => "(*)",
                (false, false) => "( )",
            };
            lines.push(format!("  {}. {} {}", i + 1, mark, option));
        }

        let label = if w.is_on_last_question() {
            "Complete Assessment"
        } else {
            "Next Question"
        };
        let state = if w.can_advance() { "" } else { " (disabled)" };
        lines.push(String::new());
        lines.push(format!("[{label}]{state}"));
        lines.join("\n")
    }
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) / 5;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

fn render_intro(question_count: usize) -> String {
    [
        "Cognitive Function Assessment".to_string(),
        "Discover your unique cognitive function stack through our advanced ML-powered assessment."
            .to_string(),
        String::new(),
        "15-20 Minutes - Average completion time".to_string(),
        format!("{question_count} Questions - Comprehensive analysis"),
        "AI Powered - Machine learning analysis".to_string(),
        String::new(),
        "What to expect:".to_string(),
        "  - Objective and subjective questions about your preferences".to_string(),
        "  - Scenario-based questions to assess cognitive patterns".to_string(),
        "  - Some questions allow multiple answers".to_string(),
        "  - Instant results with detailed cognitive function breakdown".to_string(),
        String::new(),
        "Type 'begin' to Begin Assessment".to_string(),
    ]
    .join("\n")
}

/// Ordered stack with Dominant/Auxiliary/... labels and a strength bar per line.
pub fn render_stack(stack: &[FunctionStrength]) -> Vec<String> {
    stack
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "  {:<2} {:<22} {:<9} {} {:>3}%",
                entry.function.code(),
                entry.function.name(),
                POSITIONS.get(i).copied().unwrap_or(""),
                bar(entry.strength),
                entry.strength
            )
        })
        .collect()
}

fn render_result(result: &AssessmentResult) -> String {
    let ty = result.mbti_type;
    let mut lines = vec![
        format!("You are an {ty}!"),
        format!("{} - {}", ty.nickname(), ty.description()),
        String::new(),
        "Your Cognitive Function Stack".to_string(),
    ];
    lines.extend(render_stack(&result.stack));
    lines.push(String::new());
    lines.push("Type 'profile' to View Full Profile, or 'restart' to retake".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognistack_core::seed::{enfp_stack, sample_questions};
    use cognistack_core::MbtiType;
    use std::collections::BTreeMap;

    fn started() -> AssessmentPage {
        let mut page = AssessmentPage::new(sample_questions());
        page.begin();
        page
    }

    fn to_last_question(page: &mut AssessmentPage) {
        page.choose(1).expect("q1");
        assert!(page.next());
        page.choose(2).expect("q2");
        assert!(page.next());
    }

    #[test]
    fn intro_before_begin() {
        let page = AssessmentPage::new(sample_questions());
        assert!(page.render().contains("Type 'begin' to Begin Assessment"));
        assert!(page.render().contains("3 Questions"));
    }

    #[test]
    fn button_is_disabled_until_answered() {
        let mut page = started();
        let out = page.render();
        assert!(out.starts_with("Question 1 of 3    33% Complete"));
        assert!(out.contains("[Next Question] (disabled)"));

        page.choose(3).expect("choose");
        let out = page.render();
        assert!(out.contains("3. (*) Past experiences and proven methods"));
        assert!(out.contains("[Next Question]"));
        assert!(!out.contains("(disabled)"));
    }

    #[test]
    fn option_numbers_are_checked() {
        let mut page = started();
        assert_eq!(page.choose(5), Err(SelectionError::NoSuchOption(5)));
        assert_eq!(page.toggle(1), Err(SelectionError::UseChoose));
        assert!(page.walkthrough().answers().is_empty());
    }

    #[test]
    fn toggling_adds_and_removes_options() {
        let mut page = started();
        to_last_question(&mut page);
        assert_eq!(page.choose(1), Err(SelectionError::UseToggle));

        page.toggle(1).expect("toggle on");
        page.toggle(4).expect("toggle on");
        let out = page.render();
        assert!(out.contains("(Multiple answers allowed)"));
        assert!(out.contains("1. [x] Brainstorming creative solutions"));
        assert!(out.contains("4. [x] Leading team projects"));
        assert!(out.contains("[Complete Assessment]"));

        page.toggle(1).expect("toggle off");
        page.toggle(4).expect("toggle off");
        assert!(page.render().contains("[Complete Assessment] (disabled)"));
        assert!(!page.next());
    }

    #[test]
    fn completing_asks_for_scoring_once() {
        let mut page = started();
        to_last_question(&mut page);
        page.toggle(2).expect("toggle");
        assert!(page.next());
        assert!(page.needs_scoring());
        assert!(page.render().contains("Calculating your result"));

        page.set_result(Ok(AssessmentResult {
            mbti_type: MbtiType::ENFP,
            confidence: 1.0,
            breakdown: BTreeMap::new(),
            stack: enfp_stack(),
        }));
        assert!(!page.needs_scoring());
        let out = page.render();
        assert!(out.contains("You are an ENFP!"));
        assert!(out.contains("The Campaigner - Enthusiastic, creative and sociable free spirits"));
        assert!(out.contains("Ne Extraverted Intuition"));
        assert!(out.contains("Dominant"));
        assert!(out.contains(" 95%"));
    }

    #[test]
    fn restart_is_a_fresh_walkthrough() {
        let mut page = started();
        page.choose(1).expect("choose");
        page.restart();
        assert_eq!(page.walkthrough().phase(), Phase::NotStarted);
        assert!(page.walkthrough().answers().is_empty());
        assert!(!page.needs_scoring());
        assert!(page.render().contains("Type 'begin' to Begin Assessment"));
    }

    #[test]
    fn refused_answers_are_reported() {
        // Two questions share an id, so the walkthrough checks the answer shape
        // against the first one and refuses the second question's choice.
        let mut questions = sample_questions();
        questions[1].id = questions[2].id;
        questions.swap(1, 2);
        let mut page = AssessmentPage::new(questions);
        page.begin();
        page.choose(1).expect("q1");
        assert!(page.next());
        page.toggle(1).expect("multi-select question");
        assert!(page.next());

        assert_eq!(page.choose(1), Err(SelectionError::Rejected));
        assert!(page.render().contains("1. ( ) Seek out new people and conversations"));
    }

    #[test]
    fn options_need_a_running_walkthrough() {
        let mut page = AssessmentPage::new(sample_questions());
        assert_eq!(page.choose(1), Err(SelectionError::NotInProgress));
    }
}
