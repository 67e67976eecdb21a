//! Core data model types for mathquiz.
//!
//! These are the fundamental types the engine passes around: the selected
//! operation, the resolved quiz configuration, and individual questions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QuizError;

/// Largest number of questions a single quiz may ask.
pub const MAX_QUESTIONS: u32 = 50;

/// The arithmetic operation used for every question of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// The symbol shown between the operands.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "*",
            Operation::Division => "/",
        }
    }

    /// Label used in the operation menu.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }

    /// Map a 1-based menu choice to an operation.
    pub fn from_choice(choice: i64) -> Option<Operation> {
        match choice {
            1 => Some(Operation::Addition),
            2 => Some(Operation::Subtraction),
            3 => Some(Operation::Multiplication),
            4 => Some(Operation::Division),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
            Operation::Multiplication => write!(f, "multiplication"),
            Operation::Division => write!(f, "division"),
        }
    }
}

/// Settings for one quiz run.
///
/// Built once before the quiz starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How many questions to ask (1..=50).
    pub question_count: u32,
    /// Lower bound for drawn operands (inclusive).
    pub min_range: i32,
    /// Upper bound for drawn operands (inclusive).
    pub max_range: i32,
    /// Operation used for every question.
    pub operation: Operation,
}

impl QuizConfig {
    /// Strict constructor for callers that build a configuration directly.
    pub fn new(
        question_count: u32,
        min_range: i32,
        max_range: i32,
        operation: Operation,
    ) -> Result<Self, QuizError> {
        if question_count == 0 || question_count > MAX_QUESTIONS {
            return Err(QuizError::InvalidConfig(format!(
                "question count must be between 1 and {MAX_QUESTIONS}, got {question_count}"
            )));
        }
        if min_range > max_range {
            return Err(QuizError::InvalidConfig(format!(
                "minimum range {min_range} is greater than maximum range {max_range}"
            )));
        }
        Ok(Self {
            question_count,
            min_range,
            max_range,
            operation,
        })
    }

    /// Check for conditions that do not stop a quiz but are worth reporting.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.min_range > self.max_range {
            warnings.push(ConfigWarning::InvertedRange {
                min: self.min_range,
                max: self.max_range,
            });
        }

        let (lo, hi) = self.normalized_range();
        if self.operation == Operation::Division && lo <= 0 && hi >= 0 {
            warnings.push(ConfigWarning::ZeroDivisor);
        }

        warnings
    }

    /// The operand interval with its bounds in ascending order.
    pub fn normalized_range(&self) -> (i32, i32) {
        (
            self.min_range.min(self.max_range),
            self.min_range.max(self.max_range),
        )
    }
}

/// A non-fatal problem found in a [`QuizConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The maximum fell back below the minimum; operands are drawn from
    /// the swapped interval.
    InvertedRange { min: i32, max: i32 },
    /// Division questions may draw a divisor of zero.
    ZeroDivisor,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::InvertedRange { min, max } => write!(
                f,
                "maximum range {max} is below minimum range {min}; drawing from [{max}, {min}]"
            ),
            ConfigWarning::ZeroDivisor => write!(f, "division range includes a zero divisor"),
        }
    }
}

/// One generated arithmetic problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub operand1: i64,
    pub operand2: i64,
    pub expected_answer: i64,
    pub operation: Operation,
}

impl Question {
    /// Whether `answer` matches the expected result exactly.
    pub fn check(&self, answer: i64) -> bool {
        answer == self.expected_answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.operand1,
            self.operation.symbol(),
            self.operand2
        )
    }
}

/// How a single response was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { expected: i64 },
    /// The response was missing or not an integer.
    Unanswered { expected: i64 },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }

    /// Feedback line shown to the player after judging.
    pub fn feedback(&self) -> String {
        match self {
            Outcome::Correct => "Correct!".to_string(),
            Outcome::Incorrect { expected } => {
                format!("Incorrect. The correct answer is {expected}")
            }
            Outcome::Unanswered { .. } => "Invalid input. Please enter a number.".to_string(),
        }
    }
}
