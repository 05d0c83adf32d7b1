//! Observer registry for views of the shared turn state.

use std::rc::{Rc, Weak};

use tracing::{debug, error, warn};

use crate::error::TrackerError;
use crate::state::TrackerState;

/// A view that re-derives its presentation from the turn state.
///
/// `refresh` receives the state after every mutation, including mutations
/// triggered by the observer's own view. It must be idempotent and must not
/// diff against earlier calls: the engine never sends deltas.
pub trait TrackerObserver {
    /// Name used in log records and refresh errors.
    fn label(&self) -> &str;

    fn refresh(&self, state: &TrackerState) -> Result<(), RefreshError>;
}

/// Failure reported by a single observer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("observer `{observer}` failed to refresh: {reason}")]
pub struct RefreshError {
    pub observer: String,
    pub reason: String,
}

impl RefreshError {
    pub fn new(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            reason: reason.into(),
        }
    }
}

/// How a notification reacts to a failing observer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NotifyPolicy {
    /// Stop at the first failure; later observers are not refreshed.
    #[default]
    Abort,
    /// Refresh every observer and report all failures together.
    Continue,
}

/// Handle returned by [`ObserverRegistry::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

struct Registration {
    id: SubscriptionId,
    label: String,
    observer: Weak<dyn TrackerObserver>,
}

/// Ordered, non-owning list of observers.
///
/// Registrations hold `Weak` handles: a view that is dropped mid-session is
/// skipped and pruned on the next notification instead of being called.
#[derive(Default)]
pub struct ObserverRegistry {
    registrations: Vec<Registration>,
    next_id: u64,
    policy: NotifyPolicy,
}

impl ObserverRegistry {
    pub fn new(policy: NotifyPolicy) -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 0,
            policy,
        }
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Appends an observer. The same observer may be registered twice and
    /// will then be refreshed twice per notification.
    pub fn subscribe<O>(&mut self, observer: &Rc<O>) -> SubscriptionId
    where
        O: TrackerObserver + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let weak: Weak<O> = Rc::downgrade(observer);
        self.registrations.push(Registration {
            id,
            label: observer.label().to_string(),
            observer: weak,
        });

        debug!(
            target: "tracker::observers",
            subscription = id.0,
            observer = observer.label(),
            "Observer subscribed"
        );

        id
    }

    /// Removes a registration. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|registration| registration.id != id);
        let removed = self.registrations.len() != before;

        if removed {
            debug!(target: "tracker::observers", subscription = id.0, "Observer unsubscribed");
        }

        removed
    }

    /// Number of registrations whose view is still alive.
    pub fn len(&self) -> usize {
        self.registrations
            .iter()
            .filter(|registration| registration.observer.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Refreshes every live observer in subscription order.
    ///
    /// Runs synchronously on the caller's stack. Observers only see the
    /// state, so they cannot start another mutation while this runs.
    pub fn notify_all(&mut self, state: &TrackerState) -> Result<(), TrackerError> {
        let mut failures = Vec::new();
        let mut pruned = false;

        for registration in &self.registrations {
            let Some(observer) = registration.observer.upgrade() else {
                debug!(
                    target: "tracker::observers",
                    subscription = registration.id.0,
                    observer = %registration.label,
                    "Skipping dropped observer"
                );
                pruned = true;
                continue;
            };

            let Err(failure) = observer.refresh(state) else {
                continue;
            };

            match self.policy {
                NotifyPolicy::Abort => {
                    error!(
                        target: "tracker::observers",
                        observer = %registration.label,
                        error = %failure,
                        "Observer failed, aborting notification"
                    );
                    failures.push(failure);
                    break;
                }
                NotifyPolicy::Continue => {
                    warn!(
                        target: "tracker::observers",
                        observer = %registration.label,
                        error = %failure,
                        "Observer failed, continuing"
                    );
                    failures.push(failure);
                }
            }
        }

        if pruned {
            self.registrations
                .retain(|registration| registration.observer.strong_count() > 0);
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TrackerError::Notify { failures })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::state::Character;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    }

    impl TrackerObserver for Recorder {
        fn label(&self) -> &str {
            self.name
        }

        fn refresh(&self, _state: &TrackerState) -> Result<(), RefreshError> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                Err(RefreshError::new(self.name, "boom"))
            } else {
                Ok(())
            }
        }
    }

    fn recorder(
        name: &'static str,
        log: &Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    ) -> Rc<Recorder> {
        Rc::new(Recorder {
            name,
            log: Rc::clone(log),
            fail,
        })
    }

    fn state() -> TrackerState {
        TrackerState::new([Character::new("A", 1)])
    }

    #[test]
    fn notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = recorder("first", &log, false);
        let second = recorder("second", &log, false);

        let mut registry = ObserverRegistry::default();
        registry.subscribe(&first);
        registry.subscribe(&second);
        registry.notify_all(&state()).unwrap();

        assert_eq!(*log.borrow(), ["first", "second"]);
    }

    #[test]
    fn duplicate_subscription_is_refreshed_twice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = recorder("view", &log, false);

        let mut registry = ObserverRegistry::default();
        registry.subscribe(&view);
        registry.subscribe(&view);
        registry.notify_all(&state()).unwrap();

        assert_eq!(log.borrow().len(), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn abort_policy_stops_at_first_failure() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let broken = recorder("broken", &log, true);
        let healthy = recorder("healthy", &log, false);

        let mut registry = ObserverRegistry::new(NotifyPolicy::Abort);
        registry.subscribe(&broken);
        registry.subscribe(&healthy);

        let error = registry.notify_all(&state()).unwrap_err();
        assert!(matches!(error, TrackerError::Notify { ref failures } if failures.len() == 1));
        assert_eq!(*log.borrow(), ["broken"]);
    }

    #[test]
    fn continue_policy_refreshes_everyone() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let broken = recorder("broken", &log, true);
        let healthy = recorder("healthy", &log, false);
        let also_broken = recorder("also_broken", &log, true);

        let mut registry = ObserverRegistry::new(NotifyPolicy::Continue);
        registry.subscribe(&broken);
        registry.subscribe(&healthy);
        registry.subscribe(&also_broken);

        let Err(TrackerError::Notify { failures }) = registry.notify_all(&state()) else {
            panic!("expected notify failure");
        };
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[1].observer, "also_broken");
        assert_eq!(*log.borrow(), ["broken", "healthy", "also_broken"]);
    }

    #[test]
    fn unsubscribe_removes_registration() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = recorder("view", &log, false);

        let mut registry = ObserverRegistry::default();
        let id = registry.subscribe(&view);
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));

        registry.notify_all(&state()).unwrap();
        assert!(log.borrow().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn dropped_observer_is_pruned() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let kept = recorder("kept", &log, false);
        let dropped = recorder("dropped", &log, false);

        let mut registry = ObserverRegistry::default();
        registry.subscribe(&dropped);
        registry.subscribe(&kept);
        drop(dropped);

        assert_eq!(registry.len(), 1);
        registry.notify_all(&state()).unwrap();
        assert_eq!(*log.borrow(), ["kept"]);
        assert_eq!(registry.registrations.len(), 1);
    }

    #[test]
    fn default_registry_aborts() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let broken = recorder("broken", &log, true);
        let healthy = recorder("healthy", &log, false);

        let mut registry = ObserverRegistry::default();
        registry.subscribe(&broken);
        registry.subscribe(&healthy);

        assert_eq!(registry.policy(), NotifyPolicy::Abort);
        assert!(registry.notify_all(&state()).is_err());
        assert_eq!(*log.borrow(), ["broken"]);
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("abort".parse::<NotifyPolicy>().ok(), Some(NotifyPolicy::Abort));
        assert_eq!("CONTINUE".parse::<NotifyPolicy>().ok(), Some(NotifyPolicy::Continue));
        assert!("retry".parse::<NotifyPolicy>().is_err());
    }
}
