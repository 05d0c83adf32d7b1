//! Message formatting for tracker actions.
//!
//! Turns engine outcomes into short log lines:
//! - "Meat's turn"
//! - "Back to Boblin"
//! - "Huff falls"
//! - "Everyone is down"

use tracker_core::{AdvanceOutcome, Direction, ToggleOutcome, TrackerError, TrackerState};

use crate::message::MessageEntry;

pub fn describe_advance(
    state: &TrackerState,
    direction: Direction,
    outcome: AdvanceOutcome,
) -> MessageEntry {
    match outcome {
        AdvanceOutcome::Moved { from, to } if from == to => {
            MessageEntry::info(format!("{} is the last one standing", name_at(state, to)))
        }
        AdvanceOutcome::Moved { to, .. } => match direction {
            Direction::Forward => MessageEntry::info(format!("{}'s turn", name_at(state, to))),
            Direction::Backward => MessageEntry::info(format!("Back to {}", name_at(state, to))),
        },
        AdvanceOutcome::NoLivingTarget if state.is_empty() => {
            MessageEntry::warning("No characters in the roster")
        }
        AdvanceOutcome::NoLivingTarget => MessageEntry::warning("Everyone is down"),
    }
}

/// One line for the flag change, plus one if the turn passed on.
pub fn describe_toggle(state: &TrackerState, outcome: ToggleOutcome) -> Vec<MessageEntry> {
    let name = name_at(state, outcome.index);
    let mut messages = vec![if outcome.is_dead {
        MessageEntry::info(format!("{name} falls"))
    } else {
        MessageEntry::info(format!("{name} is back in the fight"))
    }];

    if let Some(advance) = outcome.advance {
        messages.push(describe_advance(state, Direction::Forward, advance));
    }

    messages
}

pub fn describe_error(error: &TrackerError) -> MessageEntry {
    MessageEntry::error(error.to_string())
}

fn name_at(state: &TrackerState, index: usize) -> &str {
    state
        .character(index)
        .map_or("<unknown>", |character| character.name.as_str())
}
