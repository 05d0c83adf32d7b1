//! Shared turn-order state for tabletop sessions.
//!
//! `tracker-core` keeps a roster ranked by initiative, a per-character dead
//! flag and a single current-turn cursor. All mutation flows through
//! [`engine::TurnEngine`], which refreshes every subscribed view after each
//! change so that any number of views stay consistent.
pub mod engine;
pub mod error;
pub mod state;

pub use engine::{
    AdvanceOutcome, NotifyPolicy, ObserverRegistry, RefreshError, SharedTracker, SubscriptionId,
    ToggleOutcome, TrackerObserver, TurnEngine,
};
pub use error::{ErrorSeverity, TrackerError};
pub use state::{Character, Direction, RosterEntry, TrackerState};
