//! Trait definitions for the line-oriented console the quiz talks through.
//!
//! Implemented by [`crate::console::LineConsole`] for real terminals and by
//! [`crate::console::ScriptedConsole`] for tests.

use std::io;

/// A line-oriented input/output pair used in strict alternation.
pub trait QuizConsole {
    /// Print one full line.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// Returns `Ok(None)` when the input is exhausted.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Parse the first whitespace-separated token of `input` as an integer.
///
/// Returns `None` for empty or non-numeric input.
pub fn parse_integer(input: &str) -> Option<i64> {
    input.split_whitespace().next()?.parse::<i64>().ok()
}
