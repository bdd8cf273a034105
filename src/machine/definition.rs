//! Machine definitions and the pure dispatch step.

use crate::core::{Event, State};
use crate::machine::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pair of current state and current context at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<S, C> {
    pub state: S,
    pub context: C,
}

/// Immutable table of states, events and ordered transition candidates.
///
/// Candidates are kept in declaration order. For a given state and event
/// the first candidate whose guard passes wins; events with no candidate in
/// the current state are ignored.
///
/// Definitions are created with [`MachineBuilder`](crate::builder::MachineBuilder).
pub struct MachineDefinition<S: State, C, E> {
    id: String,
    initial: S,
    context: C,
    transitions: Vec<Transition<S, C, E>>,
}

impl<S: State, C: Clone, E: Event> MachineDefinition<S, C, E> {
    pub(crate) fn new(
        id: String,
        initial: S,
        context: C,
        transitions: Vec<Transition<S, C, E>>,
    ) -> Self {
        Self {
            id,
            initial,
            context,
            transitions,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn initial_context(&self) -> &C {
        &self.context
    }

    /// Snapshot the machine boots into.
    pub fn initial_snapshot(&self) -> Snapshot<S, C> {
        Snapshot {
            state: self.initial.clone(),
            context: self.context.clone(),
        }
    }

    /// All candidates, in declaration order.
    pub fn transitions(&self) -> &[Transition<S, C, E>] {
        &self.transitions
    }

    /// Candidates declared for `state` on events of `kind`, in evaluation order.
    pub fn candidates<'a>(
        &'a self,
        state: &'a S,
        kind: &'a str,
    ) -> impl Iterator<Item = &'a Transition<S, C, E>> + 'a {
        self.transitions
            .iter()
            .filter(move |t| t.from == *state && t.event == kind)
    }

    /// Whether `state` declares any candidate for events of `kind`.
    pub fn accepts(&self, state: &S, kind: &str) -> bool {
        self.candidates(state, kind).next().is_some()
    }

    /// Event kinds `state` reacts to, in first-declaration order.
    pub fn events_for(&self, state: &S) -> Vec<&'static str> {
        let mut kinds: Vec<&'static str> = Vec::new();
        for transition in self.transitions.iter().filter(|t| t.from == *state) {
            if !kinds.contains(&transition.event) {
                kinds.push(transition.event);
            }
        }
        kinds
    }

    /// Pick the candidate that handles `event` from `snapshot` (pure).
    pub fn select(&self, snapshot: &Snapshot<S, C>, event: &E) -> Option<&Transition<S, C, E>> {
        self.transitions
            .iter()
            .find(|t| t.can_execute(&snapshot.state, &snapshot.context, event))
    }

    /// Compute the snapshot that follows `event` (pure).
    ///
    /// Returns `None` when the current state ignores the event.
    pub fn transition(&self, snapshot: &Snapshot<S, C>, event: &E) -> Option<Snapshot<S, C>> {
        self.select(snapshot, event).map(|t| Snapshot {
            state: t.to.clone(),
            context: t.apply(&snapshot.context, event),
        })
    }
}

impl<S: State, C: fmt::Debug, E> fmt::Debug for MachineDefinition<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineDefinition")
            .field("id", &self.id)
            .field("initial", &self.initial)
            .field("context", &self.context)
            .field("transitions", &self.transitions)
            .finish()
    }
}
