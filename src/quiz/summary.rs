//! Derived results for the rendering layer: final grade and progress.

use crate::quiz::context::AppContext;
use crate::quiz::question::QuestionBank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score band of a finished quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    KeepStudying,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::KeepStudying,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work!",
            Self::Good => "Good job!",
            Self::Fair => "Not bad, keep practicing!",
            Self::KeepStudying => "Keep studying and try again!",
        }
    }
}

/// Final score out of the bank size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
}

impl QuizSummary {
    pub fn from_context(context: &AppContext, bank: &QuestionBank) -> Self {
        let total = bank.len();
        let percentage = if total == 0 {
            0
        } else {
            (f64::from(context.score) * 100.0 / total as f64).round() as u32
        };

        Self {
            score: context.score,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }
}

impl fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}%) {}",
            self.score,
            self.total,
            self.percentage,
            self.grade.message()
        )
    }
}

/// 1-based position of the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub number: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_context(context: &AppContext, bank: &QuestionBank) -> Self {
        Self {
            number: context.current_question_index + 1,
            total: bank.len(),
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {} of {}", self.number, self.total)
    }
}
