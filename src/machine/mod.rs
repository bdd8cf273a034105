//! Transition tables and the pure dispatch step.
//!
//! A [`MachineDefinition`] is an immutable table of guarded transition
//! candidates. Given a [`Snapshot`] and an event it computes the next
//! snapshot without side effects; the [`actor`](crate::actor) module is the
//! imperative shell that holds the current snapshot and applies events.

mod definition;
mod transition;

pub use definition::{MachineDefinition, Snapshot};
pub use transition::{Action, Transition};
