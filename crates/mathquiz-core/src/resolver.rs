//! Configuration resolver.
//!
//! Turns the player's raw answers to the four setup prompts into a
//! [`QuizConfig`]. Resolution never fails: anything unusable is replaced by
//! a default, and each prompt is asked exactly once.

use crate::error::QuizError;
use crate::model::{Operation, QuizConfig, MAX_QUESTIONS};
use crate::traits::{parse_integer, QuizConsole};

pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const DEFAULT_MIN_RANGE: i32 = 1;
pub const DEFAULT_MAX_RANGE: i32 = 10;
pub const DEFAULT_OPERATION: Operation = Operation::Addition;

pub const QUESTION_COUNT_PROMPT: &str = "Enter the number of questions (default 5, max 50): ";
pub const MIN_RANGE_PROMPT: &str = "Enter the minimum range (default 1): ";
pub const MAX_RANGE_PROMPT: &str = "Enter the maximum range (default 10): ";
pub const OPERATION_PROMPT: &str = "Enter your choice (1-4): ";

/// A resolved value plus an optional line telling the player what was
/// substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub notice: Option<&'static str>,
}

impl<T> Resolved<T> {
    fn accepted(value: T) -> Self {
        Self {
            value,
            notice: None,
        }
    }

    /// Input was unusable and a default replaces it without telling the player.
    fn defaulted(value: T) -> Self {
        Self {
            value,
            notice: None,
        }
    }

    fn substituted(value: T, notice: &'static str) -> Self {
        Self {
            value,
            notice: Some(notice),
        }
    }
}

/// Question count: non-positive or unparsable → 5, above 50 → 50.
pub fn resolve_question_count(input: &str) -> Resolved<u32> {
    match parse_integer(input) {
        Some(n) if n > i64::from(MAX_QUESTIONS) => Resolved::substituted(
            MAX_QUESTIONS,
            "Maximum of 50 questions allowed. Using 50.",
        ),
        // 1..=50 always fits.
        Some(n) if n > 0 => Resolved::accepted(n as u32),
        _ => Resolved::substituted(
            DEFAULT_QUESTION_COUNT,
            "Invalid input. Using default of 5 questions.",
        ),
    }
}

/// Minimum range: non-positive or unparsable → 1.
pub fn resolve_min_range(input: &str) -> Resolved<i32> {
    // Entries outside i32 take the default like any other unusable input.
    match parse_integer(input).and_then(|n| i32::try_from(n).ok()) {
        Some(n) if n > 0 => Resolved::accepted(n),
        _ => Resolved::defaulted(DEFAULT_MIN_RANGE),
    }
}

/// Maximum range: unparsable or below `min` → the literal 10.
///
/// The fallback does not look at `min`, so a minimum above 10 combined
/// with a bad maximum produces an inverted range. See
/// [`QuizConfig::validate`].
pub fn resolve_max_range(input: &str, min: i32) -> Resolved<i32> {
    // Same i32 narrowing as the minimum: 3000000000 falls back to 10.
    match parse_integer(input).and_then(|n| i32::try_from(n).ok()) {
        Some(n) if n >= min => Resolved::accepted(n),
        _ => Resolved::defaulted(DEFAULT_MAX_RANGE),
    }
}

/// Operation menu choice: 1..=4, anything else → Addition.
pub fn resolve_operation(input: &str) -> Resolved<Operation> {
    match parse_integer(input).and_then(Operation::from_choice) {
        Some(op) => Resolved::accepted(op),
        None => Resolved::substituted(
            DEFAULT_OPERATION,
            "Invalid choice. Defaulting to Addition.",
        ),
    }
}

/// Ask the four setup prompts once each and build the configuration.
///
/// Exhausted input counts as an invalid answer.
pub fn prompt_config(console: &mut dyn QuizConsole) -> Result<QuizConfig, QuizError> {
    let question_count = ask(console, QUESTION_COUNT_PROMPT, resolve_question_count)?;
    let min_range = ask(console, MIN_RANGE_PROMPT, resolve_min_range)?;
    let max_range = ask(console, MAX_RANGE_PROMPT, |input| {
        resolve_max_range(input, min_range)
    })?;

    console.say("")?;
    console.say("Select Operation:")?;
    for (i, op) in Operation::ALL.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, op.label()))?;
    }
    let operation = ask(console, OPERATION_PROMPT, resolve_operation)?;

    let config = QuizConfig {
        question_count,
        min_range,
        max_range,
        operation,
    };
    for warning in config.validate() {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        question_count,
        min_range,
        max_range,
        %operation,
        "quiz configured"
    );

    Ok(config)
}

fn ask<T>(
    console: &mut dyn QuizConsole,
    prompt: &str,
    resolve: impl FnOnce(&str) -> Resolved<T>,
) -> Result<T, QuizError> {
    let input = console.prompt(prompt)?.unwrap_or_default();
    let resolved = resolve(&input);
    if let Some(notice) = resolved.notice {
        console.say(notice)?;
    }
    Ok(resolved.value)
}
