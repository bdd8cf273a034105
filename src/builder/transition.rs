//! Builder for constructing transition candidates.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::machine::{Action, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, C, E> {
    from: Option<S>,
    event: Option<&'static str>,
    to: Option<S>,
    guard: Option<Guard<C>>,
    action: Option<Action<C, E>>,
}

impl<S: State, C, E> TransitionBuilder<S, C, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the event kind that triggers the transition (required).
    pub fn on(mut self, kind: &'static str) -> Self {
        self.event = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the context action (optional).
    ///
    /// Without an action the context is carried over unchanged.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&C, &E) -> C + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, C, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            event,
            to,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, C, E> Default for TransitionBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
