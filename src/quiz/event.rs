//! Events accepted by the quiz machine.

use crate::core::Event;
use serde::{Deserialize, Serialize};

/// Inputs from the rendering layer.
///
/// Serialized with a `type` tag, e.g. `{"type": "SELECT_CHOICE", "choice": "Paris"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizEvent {
    StartQuiz,
    SelectChoice { choice: String },
    SubmitAnswer,
    NextQuestion,
    ResetQuiz,
    LeaveQuiz,
}

impl QuizEvent {
    pub const START_QUIZ: &'static str = "START_QUIZ";
    pub const SELECT_CHOICE: &'static str = "SELECT_CHOICE";
    pub const SUBMIT_ANSWER: &'static str = "SUBMIT_ANSWER";
    pub const NEXT_QUESTION: &'static str = "NEXT_QUESTION";
    pub const RESET_QUIZ: &'static str = "RESET_QUIZ";
    pub const LEAVE_QUIZ: &'static str = "LEAVE_QUIZ";

    /// Every event kind, in declaration order.
    pub const KINDS: [&'static str; 6] = [
        Self::START_QUIZ,
        Self::SELECT_CHOICE,
        Self::SUBMIT_ANSWER,
        Self::NEXT_QUESTION,
        Self::RESET_QUIZ,
        Self::LEAVE_QUIZ,
    ];

    pub fn select(choice: impl Into<String>) -> Self {
        Self::SelectChoice {
            choice: choice.into(),
        }
    }
}

impl Event for QuizEvent {
    fn kind(&self) -> &'static str {
        match self {
            Self::StartQuiz => Self::START_QUIZ,
            Self::SelectChoice { .. } => Self::SELECT_CHOICE,
            Self::SubmitAnswer => Self::SUBMIT_ANSWER,
            Self::NextQuestion => Self::NEXT_QUESTION,
            Self::ResetQuiz => Self::RESET_QUIZ,
            Self::LeaveQuiz => Self::LEAVE_QUIZ,
        }
    }
}
