//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the state machine:
//! - State definitions via the `State` trait
//! - Event tagging via the `Event` trait
//! - Guard predicates for choosing between transitions
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects).

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
