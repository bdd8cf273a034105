//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::machine::{MachineDefinition, Transition};

const DEFAULT_MACHINE_ID: &str = "machine";

/// Builder for constructing machine definitions with a fluent API.
pub struct MachineBuilder<S: State, C, E> {
    id: Option<String>,
    initial: Option<S>,
    context: Option<C>,
    transitions: Vec<Transition<S, C, E>>,
}

impl<S: State, C: Clone, E: Event> MachineBuilder<S, C, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            id: None,
            initial: None,
            context: None,
            transitions: Vec::new(),
        }
    }

    /// Set the machine identifier used in diagnostics (optional).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the initial context (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, C, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, C, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, C, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the machine definition.
    ///
    /// Fails if required fields are missing or if a candidate can never be
    /// reached because an unguarded candidate for the same state and event
    /// is declared before it.
    pub fn build(self) -> Result<MachineDefinition<S, C, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingInitialContext)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        check_shadowing(&self.transitions)?;

        Ok(MachineDefinition::new(
            self.id.unwrap_or_else(|| DEFAULT_MACHINE_ID.to_string()),
            initial,
            context,
            self.transitions,
        ))
    }
}

impl<S: State, C: Clone, E: Event> Default for MachineBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_shadowing<S: State, C, E>(transitions: &[Transition<S, C, E>]) -> Result<(), BuildError> {
    for (i, earlier) in transitions.iter().enumerate() {
        if earlier.guard.is_some() {
            continue;
        }
        let shadowed = transitions[i + 1..]
            .iter()
            .any(|later| later.from == earlier.from && later.event == earlier.event);
        if shadowed {
            return Err(BuildError::ShadowedTransition {
                state: earlier.from.name().to_string(),
                event: earlier.event.to_string(),
            });
        }
    }
    Ok(())
}
