//! Transition candidates with pure context actions.

use crate::core::{Event, Guard, State};
use std::fmt;
use std::sync::Arc;

/// Pure function computing the full replacement context for a transition.
///
/// Actions receive the previous context by reference and must return a new
/// value; the previous context is never mutated.
pub type Action<C, E> = Arc<dyn Fn(&C, &E) -> C + Send + Sync>;

/// One candidate in a machine's transition table.
///
/// A candidate applies when the machine is in `from`, the incoming event's
/// kind equals `event`, and the guard (if any) passes on the current context.
/// A candidate without an action carries the context over unchanged.
pub struct Transition<S: State, C, E> {
    pub from: S,
    pub event: &'static str,
    pub to: S,
    pub guard: Option<Guard<C>>,
    pub action: Option<Action<C, E>>,
}

impl<S: State, C, E: Event> Transition<S, C, E> {
    /// Check whether this candidate is declared for the state and event (pure).
    pub fn matches(&self, current: &S, event: &E) -> bool {
        *current == self.from && event.kind() == self.event
    }

    /// Check if this transition can execute for the current snapshot (pure).
    pub fn can_execute(&self, current: &S, context: &C, event: &E) -> bool {
        if !self.matches(current, event) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(context))
    }

    /// Compute the context that results from taking this transition (pure).
    pub fn apply(&self, context: &C, event: &E) -> C
    where
        C: Clone,
    {
        match &self.action {
            Some(action) => action(context, event),
            None => context.clone(),
        }
    }
}

impl<S: State, C, E> Clone for Transition<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            event: self.event,
            to: self.to.clone(),
            guard: self.guard.clone(),
            action: self.action.clone(),
        }
    }
}

impl<S: State, C, E> fmt::Debug for Transition<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("event", &self.event)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Off,
        On,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Off => "off",
                Self::On => "on",
            }
        }
    }

    #[derive(Debug)]
    enum Input {
        Toggle,
        Dim(u8),
    }

    impl Event for Input {
        fn kind(&self) -> &'static str {
            match self {
                Self::Toggle => "TOGGLE",
                Self::Dim(_) => "DIM",
            }
        }
    }

    fn toggle(guard: Option<Guard<u8>>) -> Transition<Light, u8, Input> {
        Transition {
            from: Light::Off,
            event: "TOGGLE",
            to: Light::On,
            guard,
            action: None,
        }
    }

    #[test]
    fn can_execute_matches_state_and_event() {
        let transition = toggle(None);

        assert!(transition.can_execute(&Light::Off, &0, &Input::Toggle));
        assert!(!transition.can_execute(&Light::On, &0, &Input::Toggle));
        assert!(!transition.can_execute(&Light::Off, &0, &Input::Dim(3)));
    }

    #[test]
    fn can_execute_respects_guard() {
        let transition = toggle(Some(Guard::new(|level: &u8| *level > 0)));

        assert!(!transition.can_execute(&Light::Off, &0, &Input::Toggle));
        assert!(transition.can_execute(&Light::Off, &5, &Input::Toggle));
    }

    #[test]
    fn apply_without_action_carries_context_over() {
        let transition = toggle(None);
        assert_eq!(transition.apply(&42, &Input::Toggle), 42);
    }

    #[test]
    fn apply_runs_action_with_event_payload() {
        let transition: Transition<Light, u8, Input> = Transition {
            from: Light::On,
            event: "DIM",
            to: Light::On,
            guard: None,
            action: Some(Arc::new(|level: &u8, event: &Input| match event {
                Input::Dim(by) => level.saturating_sub(*by),
                Input::Toggle => *level,
            })),
        };

        assert_eq!(transition.apply(&10, &Input::Dim(3)), 7);
        assert_eq!(transition.apply(&2, &Input::Dim(3)), 0);
    }
}
