//! Observer registry and unsubscribe handles.

use crate::machine::Snapshot;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub(crate) type Observer<S, C> = Rc<dyn Fn(&Snapshot<S, C>)>;

/// Observers in registration order.
pub(crate) struct Observers<S: 'static, C: 'static> {
    next_id: u64,
    entries: Vec<(u64, Observer<S, C>)>,
}

impl<S: 'static, C: 'static> Observers<S, C> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, observer: Observer<S, C>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    /// Clone the current observer list so callbacks may (un)subscribe
    /// while a notification is in flight.
    pub(crate) fn current(&self) -> Vec<Observer<S, C>> {
        self.entries.iter().map(|(_, o)| Rc::clone(o)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by [`Actor::subscribe`](crate::actor::Actor::subscribe).
///
/// Dropping the handle keeps the observer registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
pub struct Subscription<S: 'static, C: 'static> {
    id: u64,
    observers: Weak<RefCell<Observers<S, C>>>,
}

impl<S: 'static, C: 'static> Subscription<S, C> {
    pub(crate) fn new(id: u64, observers: Weak<RefCell<Observers<S, C>>>) -> Self {
        Self { id, observers }
    }

    /// Remove the observer. Returns `false` if it was already gone.
    pub fn unsubscribe(self) -> bool {
        match self.observers.upgrade() {
            Some(observers) => observers.borrow_mut().remove(self.id),
            None => false,
        }
    }

    /// Whether the observer is still registered with a live actor.
    pub fn is_active(&self) -> bool {
        self.observers
            .upgrade()
            .is_some_and(|observers| observers.borrow().contains(self.id))
    }
}

impl<S: 'static, C: 'static> std::fmt::Debug for Subscription<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
