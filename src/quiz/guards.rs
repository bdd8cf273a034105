//! Guards for the quiz transition table.

use crate::quiz::context::AppContext;

/// The last answer has been submitted.
pub fn quiz_completed(context: &AppContext) -> bool {
    context.quiz_completed
}
