use tracing::debug;

use super::TurnEngine;
use crate::error::TrackerError;
use crate::state::Direction;

/// Result of a cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The cursor landed on a living character. `from == to` when the
    /// character at the cursor is the only one alive.
    Moved { from: usize, to: usize },
    /// Nobody is alive (or the roster is empty); the cursor did not move.
    NoLivingTarget,
}

/// Result of flipping a dead flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub index: usize,
    /// Dead flag after the toggle.
    pub is_dead: bool,
    /// Present when the current character died and the turn passed on.
    pub advance: Option<AdvanceOutcome>,
}

/// Turn order methods for TurnEngine.
impl TurnEngine {
    /// Moves the cursor to the next living character in `direction`,
    /// wrapping around and skipping the dead.
    ///
    /// Observers are notified even when the cursor cannot move.
    pub fn advance(&mut self, direction: Direction) -> Result<AdvanceOutcome, TrackerError> {
        let outcome = self.step(direction);
        self.notify_all()?;
        Ok(outcome)
    }

    /// Flips the dead flag of `index`.
    ///
    /// Killing the current character passes the turn forward. Reviving a
    /// character never moves the cursor. Observers are notified once either
    /// way. An out-of-range index fails without touching state or
    /// notifying.
    pub fn toggle_dead(&mut self, index: usize) -> Result<ToggleOutcome, TrackerError> {
        self.check_index(index)?;

        let is_dead = self.state.flip_dead(index);
        let advance = (is_dead && index == self.state.cursor()).then(|| self.step(Direction::Forward));

        debug!(
            target: "tracker::engine",
            index,
            is_dead,
            cursor = self.state.cursor(),
            "Dead flag toggled"
        );

        self.notify_all()?;

        Ok(ToggleOutcome {
            index,
            is_dead,
            advance,
        })
    }

    /// Marks `index` dead without ever reviving it.
    ///
    /// An already-dead character is left as is; observers are still
    /// notified.
    pub fn mark_dead(&mut self, index: usize) -> Result<ToggleOutcome, TrackerError> {
        self.check_index(index)?;

        if self.state.is_dead(index) {
            self.notify_all()?;
            return Ok(ToggleOutcome {
                index,
                is_dead: true,
                advance: None,
            });
        }

        self.toggle_dead(index)
    }

    /// Cursor movement without notification.
    fn step(&mut self, direction: Direction) -> AdvanceOutcome {
        let from = self.state.cursor();

        match self.state.next_living(direction) {
            Some(to) => {
                self.state.set_cursor(to);
                debug!(target: "tracker::engine", %direction, from, to, "Cursor advanced");
                AdvanceOutcome::Moved { from, to }
            }
            None => {
                debug!(
                    target: "tracker::engine",
                    %direction,
                    cursor = from,
                    "No living character to advance to"
                );
                AdvanceOutcome::NoLivingTarget
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<(), TrackerError> {
        let len = self.state.len();
        if index < len {
            Ok(())
        } else {
            Err(TrackerError::IndexOutOfRange { index, len })
        }
    }
}
