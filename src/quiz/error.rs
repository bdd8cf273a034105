//! Question data errors.

use thiserror::Error;

/// A single problem found while validating a question bank.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionViolation {
    #[error("question bank contains no questions")]
    EmptyBank,

    #[error("question id '{id}' is used more than once")]
    DuplicateId { id: String },

    #[error("question '{id}' has {count} choice(s), at least 2 are required")]
    TooFewChoices { id: String, count: usize },

    #[error("question '{id}' lists correct answer '{answer}' which is not among its choices")]
    MissingCorrectAnswer { id: String, answer: String },

    #[error("question '{id}' lists correct answer '{answer}' {occurrences} times among its choices")]
    AmbiguousCorrectAnswer {
        id: String,
        answer: String,
        occurrences: usize,
    },
}

/// Errors that can occur when constructing a question bank.
#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("Failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid question bank ({} violation(s)): {}", .violations.len(), describe(.violations))]
    Invalid { violations: Vec<QuestionViolation> },
}

fn describe(violations: &[QuestionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
