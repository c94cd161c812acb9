//! services/app/src/adapters/scoring.rs
//!
//! Adapters for the `ScoringService` port.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cognistack_core::{
    domain::{AnswerMap, AssessmentResult, FunctionStrength, Question},
    mbti::{MbtiType, Preference},
    ports::{PortError, PortResult, ScoringService},
    seed,
};
use tracing::debug;

//=========================================================================================
// Fixed Result
//=========================================================================================

/// Reports the same ENFP result for every completed assessment.
#[derive(Clone, Default)]
pub struct FixedScorer;

#[async_trait]
impl ScoringService for FixedScorer {
    async fn score(
        &self,
        _questions: &[Question],
        _answers: &AnswerMap,
    ) -> PortResult<AssessmentResult> {
        Ok(AssessmentResult {
            mbti_type: MbtiType::ENFP,
            confidence: 1.0,
            breakdown: BTreeMap::new(),
            stack: seed::enfp_stack(),
        })
    }
}

//=========================================================================================
// Preference Tally
//=========================================================================================

/// Counts the preference letter behind every chosen option. Each dichotomy goes to
/// the letter with strictly more votes; ties fall to I, N, F and P.
#[derive(Clone, Default)]
pub struct TallyScorer;

impl TallyScorer {
    fn tally(questions: &[Question], answers: &AnswerMap) -> (BTreeMap<Preference, u32>, u32) {
        let mut counts: BTreeMap<Preference, u32> =
            Preference::ALL.into_iter().map(|p| (p, 0)).collect();
        let mut answered = 0;

        for question in questions {
            let Some(answer) = answers.get(&question.id).filter(|a| !a.is_empty()) else {
                continue;
            };
            answered += 1;
            for key in answer.selections().filter_map(|o| question.key_for(o)) {
                *counts.entry(key).or_default() += 1;
            }
        }
        (counts, answered)
    }
}

#[async_trait]
impl ScoringService for TallyScorer {
    async fn score(
        &self,
        questions: &[Question],
        answers: &AnswerMap,
    ) -> PortResult<AssessmentResult> {
        let (counts, answered) = Self::tally(questions, answers);
        let count = |p: Preference| counts.get(&p).copied().unwrap_or(0);

        let letters = Preference::PAIRS.map(|(a, b)| if count(a) > count(b) { a } else { b });
        let mbti_type = MbtiType::new(letters)
            .ok_or_else(|| PortError::Unexpected("tally produced an invalid type".to_string()))?;

        let breakdown = Preference::ALL
            .into_iter()
            .map(|p| {
                let share = if answered == 0 {
                    0.5
                } else {
                    count(p) as f32 / answered as f32
                };
                (p, share)
            })
            .collect();

        let confidence = if answered == 0 {
            0.5
        } else {
            let spread: u32 = Preference::PAIRS
                .iter()
                .map(|&(a, b)| count(a).abs_diff(count(b)))
                .sum();
            (0.5 + spread as f32 / (2 * answered) as f32).min(1.0)
        };

        let stack = mbti_type
            .cognitive_stack()
            .into_iter()
            .map(|function| {
                let own = count(function.process());
                let other = count(function.process().opposite());
                let strength = if own + other == 0 {
                    50
                } else {
                    (own as f32 * 100.0 / (own + other) as f32).round() as u8
                };
                FunctionStrength { function, strength }
            })
            .collect();

        debug!(%mbti_type, answered, "Tallied assessment answers");
        Ok(AssessmentResult {
            mbti_type,
            confidence,
            breakdown,
            stack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognistack_core::domain::Answer;
    use cognistack_core::mbti::CognitiveFunction::*;

    fn single(value: &str) -> Answer {
        Answer::Single(value.to_string())
    }

    fn multiple(values: &[&str]) -> Answer {
        Answer::Multiple(values.iter().map(|v| v.to_string()).collect())
    }

    fn answers(q1: &str, q2: &str, q3: &[&str]) -> AnswerMap {
        AnswerMap::from([(1, single(q1)), (2, single(q2)), (3, multiple(q3))])
    }

    #[tokio::test]
    async fn fixed_scorer_always_reports_enfp() {
        let result = FixedScorer
            .score(&seed::sample_questions(), &AnswerMap::new())
            .await
            .expect("score");
        assert_eq!(result.mbti_type.to_string(), "ENFP");
        let stack: Vec<_> = result.stack.iter().map(|s| (s.function, s.strength)).collect();
        assert_eq!(stack, vec![(Ne, 95), (Fi, 88), (Te, 45), (Si, 25)]);
    }

    #[tokio::test]
    async fn tally_picks_majority_letters() {
        let map = answers(
            "Future possibilities and innovative approaches",
            "Seek out new people and conversations",
            &["Brainstorming creative solutions", "Helping others solve problems"],
        );
        let result = TallyScorer
            .score(&seed::sample_questions(), &map)
            .await
            .expect("score");

        assert_eq!(result.mbti_type.to_string(), "ENFP");
        assert_eq!(result.confidence, 1.0);
        let stack: Vec<_> = result.stack.iter().map(|s| (s.function, s.strength)).collect();
        assert_eq!(stack, vec![(Ne, 100), (Fi, 100), (Te, 0), (Si, 0)]);
    }

    #[tokio::test]
    async fn tally_ties_fall_to_second_letter() {
        let map = answers(
            "Logical analysis and objective facts",
            "Observe first before participating",
            &["Working alone on detailed tasks"],
        );
        let result = TallyScorer
            .score(&seed::sample_questions(), &map)
            .await
            .expect("score");

        assert_eq!(result.mbti_type.to_string(), "INTP");
        assert_eq!(result.stack[0].function, Ti);
        assert_eq!(result.stack[1].strength, 50);
        let i_share = result.breakdown[&Preference::I];
        assert!((i_share - 2.0 / 3.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn tally_of_nothing_is_neutral() {
        let result = TallyScorer
            .score(&seed::sample_questions(), &AnswerMap::new())
            .await
            .expect("score");
        assert_eq!(result.mbti_type.to_string(), "INFP");
        assert_eq!(result.confidence, 0.5);
    }
}
