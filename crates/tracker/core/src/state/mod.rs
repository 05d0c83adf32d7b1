//! Authoritative turn-order state.
//!
//! Views read this state during notification but mutate it exclusively
//! through [`crate::engine::TurnEngine`].
mod character;
mod turn;

pub use character::{Character, RosterEntry};
pub use turn::{Direction, TrackerState};
