//! View-model snapshots derived from [`tracker_core::TrackerState`].
//!
//! Every refresh rebuilds the whole [`RosterView`] from the state. Nothing is
//! diffed against the previous frame, so two builds from the same state and
//! selection are equal.
use bitflags::bitflags;
use tracker_core::TrackerState;

use crate::message::MessageLevel;

bitflags! {
    /// Presentation flags for a single card.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CardFlags: u8 {
        /// Cursor rests on this living character.
        const CURRENT  = 0b001;

        /// Character is dead; shown but skipped for turns.
        const DEAD     = 0b010;

        /// Row selected in the owning view (target for toggling).
        const SELECTED = 0b100;
    }
}

/// One card in the initiative list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Roster index, passed back to the engine when toggling.
    pub index: usize,
    pub name: String,
    /// Display text: the name, suffixed with "(DEAD)" for the dead.
    pub label: String,
    pub initiative: i32,
    pub flags: CardFlags,
}

impl CardView {
    pub fn is_current(&self) -> bool {
        self.flags.contains(CardFlags::CURRENT)
    }

    pub fn is_dead(&self) -> bool {
        self.flags.contains(CardFlags::DEAD)
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(CardFlags::SELECTED)
    }
}

/// Header information for a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub current: Option<String>,
    pub living: usize,
    pub total: usize,
}

/// Full presentation of the roster for one view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterView {
    pub cards: Vec<CardView>,
    /// Position of the current card, used to keep it scrolled into view.
    pub current: Option<usize>,
    pub living: usize,
}

impl RosterView {
    pub fn from_state(state: &TrackerState, selected: Option<usize>) -> Self {
        let cards: Vec<CardView> = state
            .roster()
            .into_iter()
            .map(|entry| {
                let mut flags = CardFlags::empty();
                flags.set(CardFlags::CURRENT, entry.is_current);
                flags.set(CardFlags::DEAD, entry.is_dead);
                flags.set(CardFlags::SELECTED, selected == Some(entry.index));

                let label = if entry.is_dead {
                    format!("{} (DEAD)", entry.name)
                } else {
                    entry.name.clone()
                };

                CardView {
                    index: entry.index,
                    name: entry.name,
                    label,
                    initiative: entry.initiative,
                    flags,
                }
            })
            .collect();

        let current = cards.iter().position(CardView::is_current);

        Self {
            cards,
            current,
            living: state.living_count(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn summary(&self) -> TurnSummary {
        TurnSummary {
            current: self
                .current
                .and_then(|position| self.cards.get(position))
                .map(|card| card.name.clone()),
            living: self.living,
            total: self.cards.len(),
        }
    }
}

/// Maps framework-agnostic cards onto a concrete styling system.
pub trait PresentationMapper {
    type Style;

    fn style_card(&self, card: &CardView) -> Self::Style;

    /// Marker shown next to the current card.
    fn turn_marker(&self) -> &'static str {
        "CURRENT TURN"
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::TurnEngine;

    #[test]
    fn derives_flags_and_labels() {
        let mut engine = TurnEngine::new([("Huff", 12), ("Timmy", 8), ("BBEG", 3)]);
        engine.toggle_dead(1).unwrap();

        let view = RosterView::from_state(engine.state(), Some(2));

        assert_eq!(view.cards[0].flags, CardFlags::CURRENT);
        assert_eq!(view.cards[1].label, "Timmy (DEAD)");
        assert!(view.cards[1].is_dead());
        assert!(view.cards[2].is_selected());
        assert_eq!(view.current, Some(0));
        assert_eq!(view.living, 2);
    }

    #[test]
    fn rebuild_is_structurally_equal() {
        let engine = TurnEngine::new([("Huff", 12), ("Timmy", 8)]);
        let first = RosterView::from_state(engine.state(), Some(1));
        let second = RosterView::from_state(engine.state(), Some(1));
        assert_eq!(first, second);
    }

    #[test]
    fn all_dead_has_no_current_card() {
        let mut engine = TurnEngine::new([("Huff", 12)]);
        engine.toggle_dead(0).unwrap();

        let view = RosterView::from_state(engine.state(), None);
        assert_eq!(view.current, None);
        assert_eq!(
            view.summary(),
            TurnSummary {
                current: None,
                living: 0,
                total: 1
            }
        );
    }
}
