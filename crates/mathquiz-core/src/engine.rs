//! Quiz engine.
//!
//! Drives one quiz: generates a question per slot, judges the response,
//! and accumulates [`QuizStatistics`].

use rand::Rng;

use crate::error::QuizError;
use crate::generator::QuestionGenerator;
use crate::model::{Outcome, Question, QuizConfig};
use crate::statistics::QuizStatistics;
use crate::traits::{parse_integer, QuizConsole};

/// Where the engine is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    /// Question `i` has been generated and awaits a response.
    AskingQuestion(u32),
    /// Question `i` has been judged.
    Scoring(u32),
    Finished,
}

/// Runs a single quiz against a configuration.
pub struct QuizEngine<R: Rng> {
    config: QuizConfig,
    generator: QuestionGenerator<R>,
    statistics: QuizStatistics,
    state: QuizState,
    pending: Option<Question>,
}

impl<R: Rng> QuizEngine<R> {
    pub fn new(config: QuizConfig, generator: QuestionGenerator<R>) -> Self {
        let statistics = QuizStatistics::for_quiz(config.question_count);
        let state = if config.question_count == 0 {
            QuizState::Finished
        } else {
            QuizState::NotStarted
        };
        Self {
            config,
            generator,
            statistics,
            state,
            pending: None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn statistics(&self) -> &QuizStatistics {
        &self.statistics
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    /// Generate the question for the next slot.
    ///
    /// Returns the pending question again if called twice without a
    /// `submit`, and `None` once the quiz is finished.
    pub fn next_question(&mut self) -> Option<Question> {
        let index = match self.state {
            QuizState::NotStarted => 0,
            QuizState::Scoring(i) => i + 1,
            QuizState::AskingQuestion(_) => return self.pending,
            QuizState::Finished => return None,
        };

        let question = self.generator.generate(
            self.config.operation,
            self.config.min_range,
            self.config.max_range,
        );
        tracing::debug!(index, %question, answer = question.expected_answer, "generated question");

        self.state = QuizState::AskingQuestion(index);
        self.pending = Some(question);
        Some(question)
    }

    /// Judge a response to the pending question.
    ///
    /// `None` means the player gave no usable number; it scores as wrong.
    /// Returns `None` if no question is pending.
    pub fn submit(&mut self, response: Option<i64>) -> Option<Outcome> {
        let QuizState::AskingQuestion(index) = self.state else {
            return None;
        };
        let question = self.pending.take()?;

        let outcome = match response {
            Some(answer) if question.check(answer) => Outcome::Correct,
            Some(_) => Outcome::Incorrect {
                expected: question.expected_answer,
            },
            None => Outcome::Unanswered {
                expected: question.expected_answer,
            },
        };
        self.statistics.record(outcome.is_correct());
        tracing::debug!(index, ?response, ?outcome, "judged answer");

        self.state = if index + 1 < self.config.question_count {
            QuizState::Scoring(index)
        } else {
            QuizState::Finished
        };
        Some(outcome)
    }

    /// Ask every question through `console` and return the final statistics.
    ///
    /// Only a failing console ends the run early.
    pub fn run(&mut self, console: &mut dyn QuizConsole) -> Result<QuizStatistics, QuizError> {
        while let Some(question) = self.next_question() {
            let response = console
                .prompt(&format!("What is {question}? "))?
                .as_deref()
                .and_then(parse_integer);
            if let Some(outcome) = self.submit(response) {
                console.say(&outcome.feedback())?;
            }
        }
        Ok(self.statistics)
    }
}
