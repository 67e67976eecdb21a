//! Random question generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Operation, Question};

/// Draws arithmetic questions from an injected random source.
pub struct QuestionGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one question for `operation` with operands drawn from
    /// `[min, max]`.
    ///
    /// Subtraction swaps operands so the answer is never negative. Division
    /// draws the quotient and divisor first and multiplies them back, so the
    /// dividend may lie outside the range but always divides exactly.
    /// An inverted range is sampled with its bounds swapped.
    pub fn generate(&mut self, operation: Operation, min: i32, max: i32) -> Question {
        let (lo, hi) = (min.min(max), min.max(max));

        let (operand1, operand2, expected_answer) = match operation {
            Operation::Addition => {
                let (a, b) = (self.draw(lo, hi), self.draw(lo, hi));
                (a, b, a + b)
            }
            Operation::Subtraction => {
                let (mut a, mut b) = (self.draw(lo, hi), self.draw(lo, hi));
                if a < b {
                    std::mem::swap(&mut a, &mut b);
                }
                (a, b, a - b)
            }
            Operation::Multiplication => {
                let (a, b) = (self.draw(lo, hi), self.draw(lo, hi));
                (a, b, a * b)
            }
            Operation::Division => {
                let answer = self.draw(lo, hi);
                let divisor = self.draw(lo, hi);
                (answer * divisor, divisor, answer)
            }
        };

        Question {
            operand1,
            operand2,
            expected_answer,
            operation,
        }
    }

    fn draw(&mut self, lo: i32, hi: i32) -> i64 {
        i64::from(self.rng.gen_range(lo..=hi))
    }
}

impl QuestionGenerator<StdRng> {
    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        tracing::debug!(seed, "seeding question generator from clock");
        Self::seeded(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_range_is_deterministic() {
        let mut generator = QuestionGenerator::seeded(1);
        for _ in 0..20 {
            let q = generator.generate(Operation::Addition, 1, 1);
            assert_eq!((q.operand1, q.operand2, q.expected_answer), (1, 1, 2));
        }
    }

    #[test]
    fn division_two_to_two_is_four_over_two() {
        let mut generator = QuestionGenerator::seeded(7);
        for _ in 0..20 {
            let q = generator.generate(Operation::Division, 2, 2);
            assert_eq!(q.to_string(), "4 / 2");
            assert_eq!(q.expected_answer, 2);
        }
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut generator = QuestionGenerator::seeded(42);
        for _ in 0..500 {
            let q = generator.generate(Operation::Subtraction, 1, 100);
            assert!(q.operand1 >= q.operand2, "{q}");
            assert!(q.operand2 >= 0);
            assert_eq!(q.expected_answer, q.operand1 - q.operand2);
            assert!(q.expected_answer >= 0);
        }
    }

    #[test]
    fn division_is_exact_with_operands_in_range() {
        let mut generator = QuestionGenerator::seeded(42);
        for _ in 0..500 {
            let q = generator.generate(Operation::Division, 3, 12);
            assert_eq!(q.operand1, q.expected_answer * q.operand2);
            assert!((3..=12).contains(&q.expected_answer));
            assert!((3..=12).contains(&q.operand2));
        }
    }

    #[test]
    fn addition_and_multiplication_stay_in_range() {
        let mut generator = QuestionGenerator::seeded(3);
        for _ in 0..200 {
            let add = generator.generate(Operation::Addition, 5, 9);
            assert!((5..=9).contains(&add.operand1));
            assert!((5..=9).contains(&add.operand2));
            assert_eq!(add.expected_answer, add.operand1 + add.operand2);

            let mul = generator.generate(Operation::Multiplication, 5, 9);
            assert_eq!(mul.expected_answer, mul.operand1 * mul.operand2);
        }
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let mut generator = QuestionGenerator::seeded(9);
        let q = generator.generate(Operation::Multiplication, i32::MAX, i32::MAX);
        assert_eq!(q.expected_answer, i64::from(i32::MAX) * i64::from(i32::MAX));
    }

    #[test]
    fn inverted_range_is_sampled_swapped() {
        let mut generator = QuestionGenerator::seeded(5);
        for _ in 0..100 {
            let q = generator.generate(Operation::Addition, 20, 10);
            assert!((10..=20).contains(&q.operand1));
            assert!((10..=20).contains(&q.operand2));
        }
    }

    #[test]
    fn same_seed_same_questions() {
        let mut a = QuestionGenerator::seeded(1234);
        let mut b = QuestionGenerator::seeded(1234);
        for _ in 0..10 {
            assert_eq!(
                a.generate(Operation::Multiplication, 1, 12),
                b.generate(Operation::Multiplication, 1, 12)
            );
        }
    }
}
