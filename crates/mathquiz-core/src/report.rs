//! Quiz result reporting.

use std::fmt::Write as _;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::QuizConfig;
use crate::statistics::QuizStatistics;

/// The outcome of one finished quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the first question was asked.
    pub started_at: DateTime<Utc>,
    /// Configuration the quiz ran with.
    pub config: QuizConfig,
    /// Final statistics.
    pub statistics: QuizStatistics,
    /// Wall-clock time spent answering, in milliseconds.
    pub elapsed_ms: u64,
}

impl QuizReport {
    pub fn new(
        id: Uuid,
        started_at: DateTime<Utc>,
        config: QuizConfig,
        statistics: QuizStatistics,
        elapsed: Duration,
    ) -> Self {
        Self {
            id,
            started_at,
            config,
            statistics,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }

    /// The plain-text results block.
    pub fn render_text(&self) -> String {
        let stats = &self.statistics;
        let mut out = String::new();
        let _ = writeln!(out, "--- Quiz Results ---");
        let _ = writeln!(out, "Total Questions: {}", stats.total_questions);
        let _ = writeln!(out, "Correct Answers: {}", stats.correct_answers);
        let _ = writeln!(out, "Accuracy: {:.2}%", stats.accuracy());
        let _ = writeln!(out, "Max Streak: {}", stats.max_streak);
        let _ = writeln!(out, "Total Time: {:.2} seconds", self.elapsed_secs());
        out
    }

    /// The report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize quiz report")
    }
}
