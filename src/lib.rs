//! Quizset: a pure functional quiz-flow state machine
//!
//! Quizset follows the "pure core, imperative shell" split. The transition
//! table, guards and context actions are pure functions; a small synchronous
//! actor holds the current snapshot, applies events one at a time and pushes
//! new snapshots to subscribers.
//!
//! # Core Concepts
//!
//! - **State**: discrete label of the machine via the `State` trait
//! - **Context**: data threaded through transitions, replaced wholesale by actions
//! - **Guards**: pure predicates choosing between candidates for the same event
//! - **Actor**: runtime owning one snapshot and serializing event application
//!
//! # Example
//!
//! ```rust
//! use quizset::quiz::{quiz_actor, QuestionBank, QuizEvent, QuizState};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let actor = quiz_actor(QuestionBank::sample()).unwrap();
//!
//! let updates = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&updates);
//! let subscription = actor.subscribe(move |_snapshot| seen.set(seen.get() + 1));
//!
//! actor.send(QuizEvent::StartQuiz);
//! actor.send(QuizEvent::NextQuestion); // not accepted in questionModal
//!
//! assert_eq!(actor.state(), QuizState::QuestionModal);
//! assert_eq!(updates.get(), 1);
//! subscription.unsubscribe();
//! ```

pub mod actor;
pub mod builder;
pub mod core;
pub mod machine;
pub mod quiz;

// Re-export commonly used types
pub use crate::actor::{Actor, ActorConfig, SendOutcome, Subscription};
pub use crate::core::{Event, Guard, State, StateHistory, StateTransition};
pub use crate::machine::{MachineDefinition, Snapshot};
