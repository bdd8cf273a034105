//! Data carried across quiz states.

use crate::quiz::question::Question;
use serde::{Deserialize, Serialize};

/// Context threaded through every quiz transition.
///
/// `Default` is the boot context: no question loaded, nothing selected,
/// score zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppContext {
    pub current_question: Option<Question>,
    pub selected_choice: Option<String>,
    pub score: u32,
    pub current_question_index: usize,
    pub is_answer_correct: Option<bool>,
    pub quiz_completed: bool,
}

impl AppContext {
    /// Whether a choice is selected for the current question.
    ///
    /// Submitting without a selection is still accepted by the machine;
    /// it simply scores nothing.
    pub fn can_submit(&self) -> bool {
        self.selected_choice.is_some()
    }

    pub fn is_boot(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_boot_context() {
        let context = AppContext::default();

        assert!(context.is_boot());
        assert!(context.current_question.is_none());
        assert_eq!(context.score, 0);
        assert!(!context.can_submit());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let context = AppContext {
            selected_choice: Some("Paris".to_string()),
            is_answer_correct: Some(true),
            ..AppContext::default()
        };

        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["selectedChoice"], "Paris");
        assert_eq!(json["isAnswerCorrect"], true);
        assert_eq!(json["currentQuestion"], serde_json::Value::Null);
        assert_eq!(json["quizCompleted"], false);
    }
}
