//! crates/cognistack_core/src/walkthrough.rs
//!
//! The assessment state machine: `NotStarted -> InProgress(i) -> Complete`.
//!
//! Every transition is total. Actions that are not allowed in the current state
//! (advancing without an answer, answering after completion, an answer whose shape
//! does not fit the question) leave the state untouched and report `false`.

use crate::domain::{Answer, AnswerMap, Question, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress(usize),
    Complete,
}

#[derive(Debug, Clone)]
pub struct Walkthrough {
    questions: Vec<Question>,
    answers: AnswerMap,
    phase: Phase,
}

impl Walkthrough {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: AnswerMap::new(),
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Moves from `NotStarted` to the first question. A walkthrough with no
    /// questions has nothing to ask and completes immediately.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = if self.questions.is_empty() {
            Phase::Complete
        } else {
            Phase::InProgress(0)
        };
        true
    }

    /// Stores `answer` for `question_id`, replacing whatever was there. Multi-select
    /// answers arrive as the full replacement set and are never merged.
    pub fn record_answer(&mut self, question_id: QuestionId, answer: Answer) -> bool {
        if !matches!(self.phase, Phase::InProgress(_)) {
            return false;
        }
        let Some(question) = self.questions.iter().find(|q| q.id == question_id) else {
            return false;
        };
        if question.multiple_choice != answer.is_multiple() {
            return false;
        }
        self.answers.insert(question_id, answer);
        true
    }

    pub fn answer_for(&self, question_id: QuestionId) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    /// Whether the "Next" action is enabled.
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .and_then(|q| self.answers.get(&q.id))
            .is_some_and(|a| !a.is_empty())
    }

    pub fn advance(&mut self) -> bool {
        let Phase::InProgress(index) = self.phase else {
            return false;
        };
        if !self.can_advance() {
            return false;
        }
        self.phase = if index + 1 < self.questions.len() {
            Phase::InProgress(index + 1)
        } else {
            Phase::Complete
        };
        true
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress(index) => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn is_on_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 == self.questions.len())
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Percent of the assessment reached, counting the question on screen:
    /// `(index + 1) / count * 100`. The last question already reads 100.
    pub fn progress_percent(&self) -> f64 {
        match self.phase {
            Phase::NotStarted => 0.0,
            Phase::InProgress(index) => {
                (index + 1) as f64 / self.questions.len() as f64 * 100.0
            }
            Phase::Complete => 100.0,
        }
    }

    /// 1-based question number and the total, for "Question X of N".
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index().map(|i| (i + 1, self.questions.len()))
    }

    /// The answers, once there is nothing left to ask.
    pub fn completed_answers(&self) -> Option<&AnswerMap> {
        self.is_complete().then_some(&self.answers)
    }
}
