//! The shared turn engine.
//!
//! [`TurnEngine`] owns the [`TrackerState`] and the [`ObserverRegistry`].
//! Every mutation completes and then refreshes each observer exactly once,
//! synchronously, before returning to the caller. There is no queue and no
//! background work.
//!
//! Views share one engine through [`SharedTracker`]. Observers receive only
//! a `&TrackerState` during notification, so a refresh can never re-enter a
//! mutator. Internal chaining (`toggle_dead` moving the cursor) steps the
//! cursor without notifying and then notifies once.

mod observer;
mod turns;

pub use observer::{NotifyPolicy, ObserverRegistry, RefreshError, SubscriptionId, TrackerObserver};
pub use turns::{AdvanceOutcome, ToggleOutcome};

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::TrackerError;
use crate::state::{Character, RosterEntry, TrackerState};

/// Engine handle shared by every view of a session.
pub type SharedTracker = Rc<RefCell<TurnEngine>>;

/// Owns the roster, dead flags and cursor, and keeps observers in sync.
pub struct TurnEngine {
    state: TrackerState,
    observers: ObserverRegistry,
}

impl TurnEngine {
    /// Builds an engine with the default [`NotifyPolicy`].
    ///
    /// An empty roster is valid: `advance` becomes a no-op and `roster`
    /// returns nothing.
    pub fn new<I, C>(characters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Character>,
    {
        Self::with_policy(characters, NotifyPolicy::default())
    }

    pub fn with_policy<I, C>(characters: I, policy: NotifyPolicy) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Character>,
    {
        let state = TrackerState::new(characters);
        let observers = ObserverRegistry::new(policy);

        tracing::debug!(
            target: "tracker::engine",
            characters = state.len(),
            policy = %observers.policy(),
            "Turn engine created"
        );

        Self { state, observers }
    }

    /// Wraps the engine for sharing between views.
    pub fn shared(self) -> SharedTracker {
        Rc::new(RefCell::new(self))
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Ordered presentation rows (name, initiative, dead, current).
    pub fn roster(&self) -> Vec<RosterEntry> {
        self.state.roster()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Registers an observer for future notifications.
    ///
    /// State is not replayed: the caller renders the view once after
    /// subscribing.
    pub fn subscribe<O>(&mut self, observer: &Rc<O>) -> SubscriptionId
    where
        O: TrackerObserver + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn notify_policy(&self) -> NotifyPolicy {
        self.observers.policy()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Refreshes every observer with the current state.
    pub fn notify_all(&mut self) -> Result<(), TrackerError> {
        self.observers.notify_all(&self.state)
    }
}
