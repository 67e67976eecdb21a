//! Running score and streak statistics for a quiz.

use serde::{Deserialize, Serialize};

/// Score accumulator threaded through a quiz run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizStatistics {
    /// Number of questions in the quiz.
    pub total_questions: u32,
    /// Questions answered correctly so far.
    pub correct_answers: u32,
    /// Consecutive correct answers ending at the latest question.
    pub current_streak: u32,
    /// Longest streak seen so far.
    pub max_streak: u32,
}

impl QuizStatistics {
    /// Fresh statistics for a quiz of `total_questions` questions.
    pub fn for_quiz(total_questions: u32) -> Self {
        Self {
            total_questions,
            ..Self::default()
        }
    }

    /// Record one judged answer.
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct_answers += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of questions answered correctly.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f64 * 100.0 / self.total_questions as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_resets_after_a_miss() {
        let mut stats = QuizStatistics::for_quiz(3);
        stats.record(true);
        stats.record(false);
        stats.record(true);
        assert_eq!(stats.correct_answers, 2);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
    }

    #[test]
    fn invariants_hold_after_every_update() {
        let pattern = [
            true, true, false, true, true, true, false, false, true, true, true, true,
        ];
        let mut stats = QuizStatistics::for_quiz(pattern.len() as u32);
        for correct in pattern {
            stats.record(correct);
            assert!(stats.current_streak <= stats.max_streak);
            assert!(stats.correct_answers <= stats.total_questions);
        }
        assert_eq!(stats.max_streak, 4);
        assert_eq!(stats.correct_answers, 9);
    }

    #[test]
    fn accuracy_three_of_four() {
        let stats = QuizStatistics {
            total_questions: 4,
            correct_answers: 3,
            current_streak: 0,
            max_streak: 2,
        };
        assert!((stats.accuracy() - 75.0).abs() < f64::EPSILON);
        assert_eq!(format!("{:.2}%", stats.accuracy()), "75.00%");
    }

    #[test]
    fn accuracy_of_empty_quiz_is_zero() {
        assert_eq!(QuizStatistics::default().accuracy(), 0.0);
    }
}
