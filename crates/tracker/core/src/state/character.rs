/// A single combatant in the initiative order.
///
/// Characters are immutable once the roster is built and are identified by
/// their roster index, not by name. Two characters may share a name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Character {
    pub name: String,
    pub initiative: i32,
}

impl Character {
    pub fn new(name: impl Into<String>, initiative: i32) -> Self {
        Self {
            name: name.into(),
            initiative,
        }
    }
}

impl<S: Into<String>> From<(S, i32)> for Character {
    fn from((name, initiative): (S, i32)) -> Self {
        Self::new(name, initiative)
    }
}

/// Read-only row of the roster as presented to views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    /// Roster index assigned at construction. Views pass this back to
    /// `toggle_dead`.
    pub index: usize,
    pub name: String,
    pub initiative: i32,
    pub is_dead: bool,
    /// True when the cursor rests on this entry and it is alive.
    pub is_current: bool,
}
