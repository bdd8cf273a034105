//! The quiz flow: question bank, context, events, states and the
//! transition table that ties them together.
//!
//! # Example
//!
//! ```rust
//! use quizset::quiz::{quiz_actor, QuestionBank, QuizEvent, QuizState};
//!
//! let actor = quiz_actor(QuestionBank::sample()).unwrap();
//!
//! actor.send(QuizEvent::StartQuiz);
//! actor.send(QuizEvent::select("Paris"));
//! actor.send(QuizEvent::SubmitAnswer);
//!
//! let snapshot = actor.snapshot();
//! assert_eq!(snapshot.state, QuizState::AnswerFeedback);
//! assert_eq!(snapshot.context.score, 1);
//! assert_eq!(snapshot.context.is_answer_correct, Some(true));
//! ```

pub mod actions;
mod context;
mod error;
mod event;
pub mod guards;
mod machine;
mod question;
mod state;
mod summary;

pub use context::AppContext;
pub use error::{QuestionBankError, QuestionViolation};
pub use event::QuizEvent;
pub use machine::{
    quiz_actor, quiz_actor_with_config, quiz_machine, QuizActor, QuizMachine, MACHINE_ID,
};
pub use question::{Question, QuestionBank};
pub use state::QuizState;
pub use summary::{Grade, Progress, QuizSummary};
