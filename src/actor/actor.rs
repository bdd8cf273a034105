//! Actor that holds the current snapshot and applies events to it.

use crate::actor::config::ActorConfig;
use crate::actor::subscription::{Observers, Subscription};
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::{MachineDefinition, Snapshot};
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, instrument, trace};

/// What happened to an event handed to [`Actor::send`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// A transition was taken (possibly a self transition).
    Transitioned,

    /// The current state does not react to the event; nothing changed.
    Ignored,

    /// Another event is being dispatched; this one runs right after it.
    Queued,
}

/// Runtime that owns one snapshot and applies events to it one at a time.
///
/// Events go through an internal FIFO queue and each is processed to
/// completion, subscriber notifications included, before the next one starts.
/// A subscriber that sends an event while being notified therefore never
/// re-enters a transition: the event is queued and handled before the outer
/// `send` returns.
///
/// The actor uses interior mutability and is neither `Send` nor `Sync`.
/// Share it between consumers with `Rc`; callers on other threads need their
/// own serialization at the boundary.
pub struct Actor<S: State + 'static, C: 'static, E: Event> {
    definition: MachineDefinition<S, C, E>,
    config: ActorConfig,
    snapshot: RefCell<Snapshot<S, C>>,
    history: RefCell<StateHistory<S>>,
    queue: RefCell<VecDeque<E>>,
    processing: Cell<bool>,
    observers: Rc<RefCell<Observers<S, C>>>,
}

impl<S, C, E> Actor<S, C, E>
where
    S: State + 'static,
    C: Clone + PartialEq + 'static,
    E: Event,
{
    /// Create an actor in the definition's initial snapshot.
    pub fn new(definition: MachineDefinition<S, C, E>) -> Self {
        Self::with_config(definition, ActorConfig::default())
    }

    pub fn with_config(definition: MachineDefinition<S, C, E>, config: ActorConfig) -> Self {
        let snapshot = definition.initial_snapshot();
        debug!(
            machine = definition.id(),
            state = snapshot.state.name(),
            "actor started"
        );
        Self {
            definition,
            config,
            snapshot: RefCell::new(snapshot),
            history: RefCell::new(StateHistory::new()),
            queue: RefCell::new(VecDeque::new()),
            processing: Cell::new(false),
            observers: Rc::new(RefCell::new(Observers::new())),
        }
    }

    /// Apply an event.
    ///
    /// Returns the outcome of this event, or [`SendOutcome::Queued`] when
    /// called while another event is being dispatched.
    #[instrument(level = "trace", skip_all, fields(machine = self.definition.id(), event = event.kind()))]
    pub fn send(&self, event: E) -> SendOutcome {
        self.queue.borrow_mut().push_back(event);
        if self.processing.get() {
            trace!("dispatch in progress, event queued");
            return SendOutcome::Queued;
        }

        let _dispatching = Dispatching::enter(&self.processing, &self.queue);
        let mut outcome = None;
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            let result = self.process(&event);
            outcome.get_or_insert(result);
        }
        outcome.unwrap_or(SendOutcome::Ignored)
    }

    fn process(&self, event: &E) -> SendOutcome {
        let current = self.snapshot.borrow().clone();

        let Some(transition) = self.definition.select(&current, event) else {
            trace!(
                state = current.state.name(),
                event = event.kind(),
                "event ignored"
            );
            if self.config.notify_unchanged {
                self.notify(&current);
            }
            return SendOutcome::Ignored;
        };

        let next = Snapshot {
            state: transition.to.clone(),
            context: transition.apply(&current.context, event),
        };
        debug!(
            from = current.state.name(),
            to = next.state.name(),
            event = event.kind(),
            "transition taken"
        );

        let record = StateTransition {
            from: current.state.clone(),
            to: next.state.clone(),
            event: event.kind().to_string(),
            timestamp: Utc::now(),
        };
        let history = self
            .history
            .borrow()
            .record_bounded(record, self.config.history_limit);
        *self.history.borrow_mut() = history;

        let changed = next != current;
        *self.snapshot.borrow_mut() = next.clone();
        if changed || self.config.notify_unchanged {
            self.notify(&next);
        }
        SendOutcome::Transitioned
    }

    fn notify(&self, snapshot: &Snapshot<S, C>) {
        let observers = self.observers.borrow().current();
        for observer in observers {
            observer(snapshot);
        }
    }

    /// Register an observer called with every new snapshot.
    ///
    /// Observers run synchronously in registration order after each
    /// processed event that changes the snapshot.
    pub fn subscribe<F>(&self, observer: F) -> Subscription<S, C>
    where
        F: Fn(&Snapshot<S, C>) + 'static,
    {
        let id = self.observers.borrow_mut().insert(Rc::new(observer));
        Subscription::new(id, Rc::downgrade(&self.observers))
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> Snapshot<S, C> {
        self.snapshot.borrow().clone()
    }

    pub fn state(&self) -> S {
        self.snapshot.borrow().state.clone()
    }

    pub fn context(&self) -> C {
        self.snapshot.borrow().context.clone()
    }

    /// Transitions taken so far, oldest first, bounded by the configured limit.
    pub fn history(&self) -> StateHistory<S> {
        self.history.borrow().clone()
    }

    pub fn definition(&self) -> &MachineDefinition<S, C, E> {
        &self.definition
    }

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }
}

/// Marks the actor busy for the lifetime of the value.
///
/// When an observer panics, events it queued are discarded along with the
/// busy flag so they cannot leak into the next unrelated `send`.
struct Dispatching<'a, E> {
    flag: &'a Cell<bool>,
    queue: &'a RefCell<VecDeque<E>>,
}

impl<'a, E> Dispatching<'a, E> {
    fn enter(flag: &'a Cell<bool>, queue: &'a RefCell<VecDeque<E>>) -> Self {
        flag.set(true);
        Self { flag, queue }
    }
}

impl<E> Drop for Dispatching<'_, E> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            if let Ok(mut queue) = self.queue.try_borrow_mut() {
                queue.clear();
            }
        }
        self.flag.set(false);
    }
}
