use std::cmp::Reverse;

use super::{Character, RosterEntry};

/// Direction of cursor movement through the roster.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed index offset for a single step.
    pub const fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Turn-order state for one session.
///
/// The roster is sorted once at construction and never reordered, so a roster
/// index stays valid for the lifetime of the session. Dead characters keep
/// their index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerState {
    characters: Vec<Character>,
    dead: Vec<bool>,
    cursor: usize,
}

impl TrackerState {
    /// Builds the state from unsorted input.
    ///
    /// Characters are ordered by initiative, highest first. Equal initiatives
    /// keep their input order.
    pub fn new<I, C>(characters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Character>,
    {
        let mut characters: Vec<Character> = characters.into_iter().map(Into::into).collect();
        // `sort_by_key` is stable, which keeps ties in input order.
        characters.sort_by_key(|character| Reverse(character.initiative));

        let dead = vec![false; characters.len()];

        Self {
            characters,
            dead,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    /// Index of the character whose turn it is.
    ///
    /// Always `0` for an empty roster. When every character is dead this may
    /// point at a dead character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `false` for indices outside the roster.
    pub fn is_dead(&self, index: usize) -> bool {
        self.dead.get(index).copied().unwrap_or(false)
    }

    /// The living character whose turn it is, if any.
    pub fn current(&self) -> Option<&Character> {
        if self.is_dead(self.cursor) {
            return None;
        }
        self.characters.get(self.cursor)
    }

    pub fn living_count(&self) -> usize {
        self.dead.iter().filter(|dead| !**dead).count()
    }

    /// True for a non-empty roster with no living characters.
    pub fn all_dead(&self) -> bool {
        !self.is_empty() && self.living_count() == 0
    }

    /// Ordered presentation rows, one per roster index.
    pub fn roster(&self) -> Vec<RosterEntry> {
        self.characters
            .iter()
            .enumerate()
            .map(|(index, character)| {
                let is_dead = self.dead[index];
                RosterEntry {
                    index,
                    name: character.name.clone(),
                    initiative: character.initiative,
                    is_dead,
                    is_current: index == self.cursor && !is_dead,
                }
            })
            .collect()
    }

    /// Next living index from the cursor in `direction`, wrapping around.
    ///
    /// The cursor's own index is only reached after a full wrap, so a lone
    /// living character at the cursor is found on the last step. Returns
    /// `None` when nobody is alive.
    pub(crate) fn next_living(&self, direction: Direction) -> Option<usize> {
        let len = self.len() as isize;
        if len == 0 {
            return None;
        }

        let start = self.cursor as isize;
        (1..=len)
            .map(|offset| (start + direction.step() * offset).rem_euclid(len) as usize)
            .find(|&candidate| !self.dead[candidate])
    }

    pub(crate) fn set_cursor(&mut self, index: usize) {
        debug_assert!(index < self.len());
        self.cursor = index;
    }

    /// Flips the dead flag and returns the new value.
    pub(crate) fn flip_dead(&mut self, index: usize) -> bool {
        let flag = &mut self.dead[index];
        *flag = !*flag;
        *flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(entries: &[(&str, i32)]) -> TrackerState {
        TrackerState::new(entries.iter().copied())
    }

    #[test]
    fn sorts_by_initiative_descending() {
        let state = state(&[("Low", 3), ("High", 18), ("Mid", 10)]);
        let names: Vec<_> = state.characters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["High", "Mid", "Low"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let state = state(&[("A", 5), ("B", 12), ("C", 5), ("D", 12), ("E", 5)]);
        let names: Vec<_> = state.characters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["B", "D", "A", "C", "E"]);
    }

    #[test]
    fn next_living_wraps_both_ways() {
        let mut state = state(&[("A", 3), ("B", 2), ("C", 1)]);
        state.flip_dead(1);

        assert_eq!(state.next_living(Direction::Forward), Some(2));
        assert_eq!(state.next_living(Direction::Backward), Some(2));

        state.set_cursor(2);
        assert_eq!(state.next_living(Direction::Forward), Some(0));
        assert_eq!(state.next_living(Direction::Backward), Some(0));
    }

    #[test]
    fn next_living_returns_self_when_only_survivor() {
        let mut state = state(&[("A", 3), ("B", 2)]);
        state.flip_dead(1);
        assert_eq!(state.next_living(Direction::Forward), Some(0));
    }

    #[test]
    fn next_living_none_when_all_dead_or_empty() {
        let mut state = state(&[("A", 3), ("B", 2)]);
        state.flip_dead(0);
        state.flip_dead(1);
        assert_eq!(state.next_living(Direction::Forward), None);
        assert!(state.all_dead());

        let empty = TrackerState::new(Vec::<Character>::new());
        assert_eq!(empty.next_living(Direction::Backward), None);
        assert!(!empty.all_dead());
    }

    #[test]
    fn dead_cursor_target_is_not_current() {
        let mut state = state(&[("A", 3), ("B", 2)]);
        state.flip_dead(0);
        let roster = state.roster();
        assert!(roster[0].is_dead);
        assert!(!roster[0].is_current);
        assert!(state.current().is_none());
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("Forward".parse::<Direction>().ok(), Some(Direction::Forward));
        assert_eq!("backward".parse::<Direction>().ok(), Some(Direction::Backward));
        assert_eq!(Direction::Backward.to_string(), "backward");
    }
}
