//! Arithmetic sign-in challenge.
//!
//! A lightweight bot deterrent, not cryptography: two small random numbers
//! whose sum is the only acceptable answer.

use rand::Rng;

/// One generated challenge. The displayed question and its precomputed answer
/// always belong together; regenerating replaces both at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub question: String,
    pub answer: i32,
}

impl Challenge {
    /// Draw two integers in `[1, 10]` and expose their sum as the answer.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let a: i32 = rng.gen_range(1..=10);
        let b: i32 = rng.gen_range(1..=10);
        Self {
            question: format!("{a} + {b}"),
            answer: a + b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_the_sum_of_the_question_terms() {
        for _ in 0..100 {
            let challenge = Challenge::generate();
            let terms: Vec<i32> = challenge
                .question
                .split(" + ")
                .map(|t| t.parse().unwrap())
                .collect();
            assert_eq!(terms.len(), 2);
            assert_eq!(terms[0] + terms[1], challenge.answer);
        }
    }

    #[test]
    fn terms_stay_in_range() {
        for _ in 0..100 {
            let challenge = Challenge::generate();
            for term in challenge.question.split(" + ") {
                let term: i32 = term.parse().unwrap();
                assert!((1..=10).contains(&term), "term {term} out of range");
            }
            assert!((2..=20).contains(&challenge.answer));
        }
    }
}
