//! Multiple-choice trivia quiz.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

/// Questions asked per quiz.
pub const QUESTIONS_PER_QUIZ: usize = 3;
/// Answers offered per question.
pub const ANSWERS_PER_QUESTION: usize = 4;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub answers: [String; ANSWERS_PER_QUESTION],
    /// Index into `answers`.
    pub correct: usize,
}

/// Question pool, loaded from `assets/data/trivia.ron`.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct TriviaBank {
    pub questions: Vec<Question>,
}

impl Default for TriviaBank {
    fn default() -> Self {
        let question = |text: &str, answers: [&str; ANSWERS_PER_QUESTION], correct| Question {
            question: text.to_string(),
            answers: answers.map(str::to_string),
            correct,
        };
        Self {
            questions: vec![
                question(
                    "Which of these is not a programming language?",
                    ["Python", "Java", "Cobra", "Ruby"],
                    2,
                ),
                question(
                    "What is the capital of Bulgaria?",
                    ["Sofia", "Bucharest", "Belgrade", "Skopje"],
                    0,
                ),
                question(
                    "What is the chemical symbol for water?",
                    ["H2O", "CO2", "NaCl", "O2"],
                    0,
                ),
                question(
                    "Which planet is known as the 'Red Planet'?",
                    ["Venus", "Mars", "Jupiter", "Saturn"],
                    1,
                ),
                question(
                    "Which ocean is the largest?",
                    ["Pacific Ocean", "Atlantic Ocean", "Indian Ocean", "Arctic Ocean"],
                    0,
                ),
            ],
        }
    }
}

/// One quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaQuiz {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    correct_answers: u32,
    /// Clock time the last question was answered.
    finished_at: Option<u64>,
}

impl TriviaQuiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            correct_answers: 0,
            finished_at: None,
        }
    }

    /// Pick up to three random questions from the bank.
    pub fn from_bank(bank: &TriviaBank, rng: &mut impl Rng) -> Self {
        let questions = bank
            .questions
            .choose_multiple(rng, QUESTIONS_PER_QUIZ)
            .cloned()
            .collect();
        Self::new(questions)
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.is_over() {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Highlight the next answer, wrapping after the last one.
    pub fn select_next(&mut self) {
        if self.is_over() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % ANSWERS_PER_QUESTION));
    }

    /// Lock in the highlighted answer. Does nothing without a selection.
    pub fn confirm(&mut self, now: u64) {
        let Some(selected) = self.selected else {
            return;
        };
        let Some(question) = self.current_question() else {
            return;
        };
        if selected == question.correct {
            self.correct_answers += 1;
        }
        self.selected = None;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finished_at = Some(now);
        }
    }

    /// All questions answered; the score screen is showing.
    pub fn is_over(&self) -> bool {
        self.finished_at.is_some() || self.questions.is_empty()
    }

    /// Score screen shown for `delay` ms.
    pub fn is_finished(&self, now: u64, delay: u64) -> bool {
        match self.finished_at {
            Some(at) => now.saturating_sub(at) >= delay,
            None => self.questions.is_empty(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn question_number(&self) -> usize {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiz() -> TriviaQuiz {
        TriviaQuiz::new(TriviaBank::default().questions[..3].to_vec())
    }

    #[test]
    fn selection_cycles_through_four_answers() {
        let mut quiz = quiz();
        assert_eq!(quiz.selected(), None);
        for expected in [0, 1, 2, 3, 0] {
            quiz.select_next();
            assert_eq!(quiz.selected(), Some(expected));
        }
    }

    #[test]
    fn confirm_needs_a_selection() {
        let mut quiz = quiz();
        quiz.confirm(0);
        assert_eq!(quiz.question_number(), 0);
    }

    #[test]
    fn scores_against_the_asked_question() {
        let mut quiz = quiz();
        // "Cobra" is the third answer
        for _ in 0..3 {
            quiz.select_next();
        }
        quiz.confirm(10);
        // Wrong answer for Sofia
        quiz.select_next();
        quiz.select_next();
        quiz.confirm(20);
        // H2O
        quiz.select_next();
        quiz.confirm(1_000);

        assert_eq!(quiz.correct_answers(), 2);
        assert!(quiz.is_over());
        assert!(!quiz.is_finished(5_999, 5_000));
        assert!(quiz.is_finished(6_000, 5_000));
    }

    #[test]
    fn bank_draws_distinct_questions() {
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = TriviaQuiz::from_bank(&TriviaBank::default(), &mut rng);
        assert_eq!(quiz.questions.len(), QUESTIONS_PER_QUIZ);
        assert_ne!(quiz.questions[0], quiz.questions[1]);
    }

    #[test]
    fn bank_parses_from_ron() {
        let bank: TriviaBank = ron::from_str(
            r#"[(question: "Largest ocean?", answers: ("Pacific", "Atlantic", "Indian", "Arctic"), correct: 0)]"#,
        )
        .expect("valid trivia");
        assert_eq!(bank.questions.len(), 1);
        assert_eq!(bank.questions[0].answers[1], "Atlantic");
    }
}
