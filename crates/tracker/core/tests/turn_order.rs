use std::cell::RefCell;
use std::rc::Rc;

use tracker_core::{
    AdvanceOutcome, Character, Direction, NotifyPolicy, RefreshError, RosterEntry, TrackerError,
    TrackerObserver, TrackerState, TurnEngine,
};

/// Observer that stores every roster it is shown.
struct RecordingView {
    name: String,
    renders: RefCell<Vec<Vec<RosterEntry>>>,
    journal: Rc<RefCell<Vec<String>>>,
}

impl RecordingView {
    fn new(name: &str, journal: &Rc<RefCell<Vec<String>>>) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            renders: RefCell::new(Vec::new()),
            journal: Rc::clone(journal),
        })
    }

    fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    fn last(&self) -> Vec<RosterEntry> {
        self.renders.borrow().last().cloned().unwrap_or_default()
    }
}

impl TrackerObserver for RecordingView {
    fn label(&self) -> &str {
        &self.name
    }

    fn refresh(&self, state: &TrackerState) -> Result<(), RefreshError> {
        self.renders.borrow_mut().push(state.roster());
        self.journal.borrow_mut().push(self.name.clone());
        Ok(())
    }
}

/// Observer whose refresh always fails, after noting the attempt.
struct BrokenView {
    journal: Rc<RefCell<Vec<String>>>,
}

impl TrackerObserver for BrokenView {
    fn label(&self) -> &str {
        "broken"
    }

    fn refresh(&self, _state: &TrackerState) -> Result<(), RefreshError> {
        self.journal.borrow_mut().push("broken".to_string());
        Err(RefreshError::new("broken", "window closed"))
    }
}

fn broken(journal: &Rc<RefCell<Vec<String>>>) -> Rc<BrokenView> {
    Rc::new(BrokenView {
        journal: Rc::clone(journal),
    })
}

fn abc() -> TurnEngine {
    TurnEngine::new([("A", 30), ("B", 20), ("C", 10)])
}

#[test]
fn roster_is_sorted_descending_and_stable() {
    let engine = TurnEngine::new([
        ("Huff", 7),
        ("Boblin", 15),
        ("Meat", 7),
        ("BBEG", 20),
        ("Timmy", 15),
        ("Branch", 7),
    ]);

    let roster = engine.roster();
    let order: Vec<_> = roster.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(order, ["BBEG", "Boblin", "Timmy", "Huff", "Meat", "Branch"]);
    assert!(roster.windows(2).all(|w| w[0].initiative >= w[1].initiative));
    assert!(roster.iter().enumerate().all(|(i, e)| e.index == i));
}

#[test]
fn advance_skips_dead_and_wraps_around() {
    let mut engine = abc();
    engine.toggle_dead(1).unwrap();
    assert_eq!(engine.cursor(), 0);

    engine.advance(Direction::Forward).unwrap();
    assert_eq!(engine.cursor(), 2);

    engine.advance(Direction::Forward).unwrap();
    assert_eq!(engine.cursor(), 0);
}

#[test]
fn everyone_dead_leaves_cursor_and_reports_no_target() {
    let mut engine = TurnEngine::new([("A", 2), ("B", 1)]);
    engine.toggle_dead(1).unwrap();
    engine.toggle_dead(0).unwrap();
    let cursor = engine.cursor();

    let outcome = engine.advance(Direction::Forward).unwrap();
    assert_eq!(outcome, AdvanceOutcome::NoLivingTarget);
    assert_eq!(engine.cursor(), cursor);
    assert!(engine.roster().iter().all(|entry| entry.is_dead));
    assert!(engine.roster().iter().all(|entry| !entry.is_current));
}

#[test]
fn killing_current_advances_with_single_notification() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let view = RecordingView::new("view", &journal);
    let mut engine = abc();
    engine.subscribe(&view);

    engine.toggle_dead(0).unwrap();

    assert_eq!(engine.cursor(), 1);
    assert_eq!(view.render_count(), 1);
    let roster = view.last();
    assert!(roster[0].is_dead);
    assert!(roster[1].is_current);
}

#[test]
fn killing_other_character_keeps_cursor() {
    let mut engine = abc();
    let outcome = engine.toggle_dead(2).unwrap();

    assert!(outcome.is_dead);
    assert_eq!(outcome.advance, None);
    assert_eq!(engine.cursor(), 0);
    assert!(engine.state().is_dead(2));
}

#[test]
fn refresh_twice_renders_equal_rosters() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let view = RecordingView::new("view", &journal);
    let mut engine = abc();
    engine.subscribe(&view);
    engine.toggle_dead(1).unwrap();

    view.refresh(engine.state()).unwrap();
    view.refresh(engine.state()).unwrap();

    let renders = view.renders.borrow();
    let n = renders.len();
    assert_eq!(renders[n - 1], renders[n - 2]);
}

#[test]
fn out_of_range_toggle_fails_without_side_effects() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let view = RecordingView::new("view", &journal);
    let mut engine = abc();
    engine.subscribe(&view);
    let before = engine.state().clone();

    let len = engine.len();
    assert_eq!(
        engine.toggle_dead(len),
        Err(TrackerError::IndexOutOfRange { index: len, len })
    );
    assert!(engine.toggle_dead(usize::MAX).is_err());

    assert_eq!(engine.state(), &before);
    assert_eq!(view.render_count(), 0);
}

#[test]
fn every_mutation_fans_out_once_per_observer_in_order() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let left = RecordingView::new("left", &journal);
    let middle = RecordingView::new("middle", &journal);
    let right = RecordingView::new("right", &journal);

    let mut engine = abc();
    engine.subscribe(&left);
    engine.subscribe(&middle);
    engine.subscribe(&right);

    engine.advance(Direction::Forward).unwrap();
    assert_eq!(*journal.borrow(), ["left", "middle", "right"]);

    journal.borrow_mut().clear();
    engine.advance(Direction::Backward).unwrap();
    assert_eq!(*journal.borrow(), ["left", "middle", "right"]);

    journal.borrow_mut().clear();
    engine.toggle_dead(2).unwrap();
    assert_eq!(*journal.borrow(), ["left", "middle", "right"]);

    assert_eq!(left.last(), right.last());
}

#[test]
fn noop_advance_still_notifies() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let view = RecordingView::new("view", &journal);
    let mut engine = TurnEngine::new(Vec::<Character>::new());
    engine.subscribe(&view);

    engine.advance(Direction::Forward).unwrap();
    assert_eq!(view.render_count(), 1);
    assert!(view.last().is_empty());
}

#[test]
fn views_share_one_engine() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let tracker = abc().shared();
    let first = RecordingView::new("first", &journal);
    let second = RecordingView::new("second", &journal);

    tracker.borrow_mut().subscribe(&first);
    let second_id = tracker.borrow_mut().subscribe(&second);

    let handle = Rc::clone(&tracker);
    handle.borrow_mut().advance(Direction::Forward).unwrap();
    assert_eq!(first.last(), second.last());

    assert!(tracker.borrow_mut().unsubscribe(second_id));
    tracker.borrow_mut().advance(Direction::Forward).unwrap();
    assert_eq!(first.render_count(), 2);
    assert_eq!(second.render_count(), 1);
    assert_eq!(tracker.borrow().observer_count(), 1);
}

#[test]
fn default_policy_stops_at_failing_observer_after_mutating() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let failing = broken(&journal);
    let healthy = RecordingView::new("healthy", &journal);

    let mut engine = abc();
    assert_eq!(engine.notify_policy(), NotifyPolicy::Abort);
    engine.subscribe(&failing);
    engine.subscribe(&healthy);

    let error = engine.advance(Direction::Forward).unwrap_err();
    assert!(matches!(error, TrackerError::Notify { ref failures } if failures.len() == 1));
    assert_eq!(engine.cursor(), 1);
    assert_eq!(healthy.render_count(), 0);

    let error = engine.toggle_dead(1).unwrap_err();
    assert!(matches!(error, TrackerError::Notify { .. }));
    assert!(engine.state().is_dead(1));
    assert_eq!(engine.cursor(), 2);

    assert_eq!(*journal.borrow(), ["broken", "broken"]);
}

#[test]
fn continue_policy_refreshes_past_failing_observer() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let failing = broken(&journal);
    let healthy = RecordingView::new("healthy", &journal);

    let mut engine = TurnEngine::with_policy([("A", 30), ("B", 20), ("C", 10)], NotifyPolicy::Continue);
    engine.subscribe(&failing);
    engine.subscribe(&healthy);

    let Err(TrackerError::Notify { failures }) = engine.toggle_dead(0) else {
        panic!("expected notify failure");
    };
    assert_eq!(failures[0].observer, "broken");
    assert!(engine.state().is_dead(0));
    assert_eq!(engine.cursor(), 1);

    assert!(engine.advance(Direction::Backward).is_err());
    assert_eq!(engine.cursor(), 2);

    assert_eq!(healthy.render_count(), 2);
    assert!(healthy.last()[2].is_current);
    assert_eq!(*journal.borrow(), ["broken", "healthy", "broken", "healthy"]);
}
