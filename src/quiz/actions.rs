//! Pure context updates for quiz transitions.
//!
//! Every function returns a complete replacement context and leaves its
//! input untouched.

use crate::quiz::context::AppContext;
use crate::quiz::question::QuestionBank;

/// Load the first question and clear all progress.
pub fn start_quiz(bank: &QuestionBank, _context: &AppContext) -> AppContext {
    AppContext {
        current_question: bank.get(0).cloned(),
        selected_choice: None,
        score: 0,
        current_question_index: 0,
        is_answer_correct: None,
        quiz_completed: false,
    }
}

/// Record the chosen answer; nothing else changes.
pub fn select_choice(context: &AppContext, choice: &str) -> AppContext {
    AppContext {
        selected_choice: Some(choice.to_string()),
        ..context.clone()
    }
}

/// Grade the selected choice against the current question.
///
/// Without a question or a selection the correctness is unknown (`None`)
/// and the score is left alone. `quiz_completed` is set when the current
/// question is the last one in the bank.
pub fn submit_answer(bank: &QuestionBank, context: &AppContext) -> AppContext {
    let is_answer_correct = match (&context.current_question, &context.selected_choice) {
        (Some(question), Some(choice)) => Some(question.is_correct(choice)),
        _ => None,
    };
    let score = if is_answer_correct == Some(true) {
        context.score + 1
    } else {
        context.score
    };

    AppContext {
        current_question: context.current_question.clone(),
        selected_choice: context.selected_choice.clone(),
        score,
        current_question_index: context.current_question_index,
        is_answer_correct,
        quiz_completed: context.current_question_index + 1 >= bank.len(),
    }
}

/// Advance to the next question and clear the previous answer.
pub fn load_next_question(bank: &QuestionBank, context: &AppContext) -> AppContext {
    let next_index = context.current_question_index + 1;
    AppContext {
        current_question: bank.get(next_index).cloned(),
        selected_choice: None,
        score: context.score,
        current_question_index: next_index,
        is_answer_correct: None,
        quiz_completed: context.quiz_completed,
    }
}

/// Back to the boot context.
pub fn reset_quiz(_context: &AppContext) -> AppContext {
    AppContext::default()
}
