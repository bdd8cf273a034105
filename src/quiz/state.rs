//! Discrete states of the quiz flow.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quiz states. The machine boots in `Idle` and cycles back to it; there is
/// no final state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizState {
    #[default]
    Idle,
    QuestionModal,
    AnswerFeedback,
    QuizComplete,
}

impl QuizState {
    pub const ALL: [QuizState; 4] = [
        Self::Idle,
        Self::QuestionModal,
        Self::AnswerFeedback,
        Self::QuizComplete,
    ];
}

impl State for QuizState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::QuestionModal => "questionModal",
            Self::AnswerFeedback => "answerFeedback",
            Self::QuizComplete => "quizComplete",
        }
    }
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_name_matches_state_name() {
        for state in QuizState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.name()));
        }
    }

    #[test]
    fn no_state_is_final() {
        assert!(QuizState::ALL.iter().all(|s| !s.is_final()));
        assert_eq!(QuizState::default(), QuizState::Idle);
    }
}
