//! Terminal view over the shared engine.
//!
//! Every pane is an observer of the same engine. A pane never caches turn
//! state of its own: it keeps a [`RosterView`] rebuilt on each refresh plus
//! the row the user has selected for toggling.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use client_frontend_core::{CardFlags, MessageEntry, RosterView, format};
use tracker_core::{
    Direction, RefreshError, SharedTracker, SubscriptionId, TrackerError, TrackerObserver,
    TrackerState,
};

pub struct TrackerPane {
    label: String,
    tracker: SharedTracker,
    subscription: Cell<Option<SubscriptionId>>,
    selected: Cell<usize>,
    last_cursor: Cell<Option<usize>>,
    view: RefCell<RosterView>,
}

impl TrackerPane {
    /// Creates a pane and subscribes it to `tracker`.
    ///
    /// The engine only holds a weak reference, so the pane stops receiving
    /// refreshes once the returned `Rc` is dropped.
    pub fn attach(label: impl Into<String>, tracker: &SharedTracker) -> Rc<Self> {
        let pane = Rc::new(Self {
            label: label.into(),
            tracker: Rc::clone(tracker),
            subscription: Cell::new(None),
            selected: Cell::new(0),
            last_cursor: Cell::new(None),
            view: RefCell::new(RosterView::default()),
        });

        let mut engine = tracker.borrow_mut();
        pane.rebuild(engine.state());
        let id = engine.subscribe(&pane);
        pane.subscription.set(Some(id));

        tracing::debug!(pane = %pane.label, "Pane attached");
        pane
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stops refreshes for this pane. Returns false if it was not attached.
    pub fn detach(&self) -> bool {
        match self.subscription.take() {
            Some(id) => self.tracker.borrow_mut().unsubscribe(id),
            None => false,
        }
    }

    /// Copy of the last rendered view.
    pub fn snapshot(&self) -> RosterView {
        self.view.borrow().clone()
    }

    pub fn selected(&self) -> usize {
        self.selected.get()
    }

    pub fn next_turn(&self) -> Result<Vec<MessageEntry>, TrackerError> {
        self.turn(Direction::Forward)
    }

    pub fn previous_turn(&self) -> Result<Vec<MessageEntry>, TrackerError> {
        self.turn(Direction::Backward)
    }

    /// Flips the dead flag of the selected row.
    pub fn toggle_selected(&self) -> Result<Vec<MessageEntry>, TrackerError> {
        let mut engine = self.tracker.borrow_mut();
        if engine.is_empty() {
            return Ok(vec![MessageEntry::warning("No characters in the roster")]);
        }

        let outcome = engine.toggle_dead(self.selected.get())?;
        Ok(format::describe_toggle(engine.state(), outcome))
    }

    /// Moves the selection down one row, wrapping. Local to this pane.
    pub fn select_next(&self) {
        self.move_selection(1);
    }

    pub fn select_previous(&self) {
        self.move_selection(-1);
    }

    fn turn(&self, direction: Direction) -> Result<Vec<MessageEntry>, TrackerError> {
        let mut engine = self.tracker.borrow_mut();
        let outcome = engine.advance(direction)?;
        Ok(vec![format::describe_advance(engine.state(), direction, outcome)])
    }

    fn move_selection(&self, step: isize) {
        let mut view = self.view.borrow_mut();
        let len = view.len();
        if len == 0 {
            return;
        }

        let selected = (self.selected.get() as isize + step).rem_euclid(len as isize) as usize;
        self.selected.set(selected);
        for card in &mut view.cards {
            card.flags.set(CardFlags::SELECTED, card.index == selected);
        }
    }

    /// Rebuilds the view. The selection follows the cursor whenever the
    /// turn has moved since the last refresh.
    fn rebuild(&self, state: &TrackerState) {
        let cursor = state.cursor();
        if self.last_cursor.replace(Some(cursor)) != Some(cursor) {
            self.selected.set(cursor);
        }
        if state.is_empty() {
            self.selected.set(0);
        } else {
            self.selected.set(self.selected.get().min(state.len() - 1));
        }

        let selected = (!state.is_empty()).then(|| self.selected.get());
        *self.view.borrow_mut() = RosterView::from_state(state, selected);
    }
}

impl TrackerObserver for TrackerPane {
    fn label(&self) -> &str {
        &self.label
    }

    fn refresh(&self, state: &TrackerState) -> Result<(), RefreshError> {
        if self.view.try_borrow_mut().is_err() {
            return Err(RefreshError::new(&self.label, "view is being rendered"));
        }

        self.rebuild(state);
        let view = self.view.borrow();
        tracing::trace!(
            pane = %self.label,
            current = ?view.current,
            living = view.living,
            "Pane refreshed"
        );
        Ok(())
    }
}
