//! Input providers that produce the initial roster.
//!
//! Providers only collect `(name, initiative)` pairs. Ordering is the
//! engine's job, so every provider may return unsorted data.

use std::io::{BufRead, Write};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracker_core::Character;

/// Names used by the deterministic test roster.
pub const TEST_CHARACTERS: [&str; 8] = [
    "Boblin",
    "Meat",
    "Branch",
    "Huff",
    "Timmy",
    "BBEG",
    "Monster 1",
    "Monster 2",
];

/// Errors raised while collecting characters.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to read character entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces the characters for a new session.
///
/// Every returned character has a non-empty name.
pub trait RosterSource {
    fn collect(&mut self) -> Result<Vec<Character>, BootstrapError>;
}

/// Fixed names with initiatives rolled from a seeded d20.
#[derive(Clone, Debug)]
pub struct TestRoster {
    seed: u64,
}

impl TestRoster {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Picks a fresh seed. The seed is logged so a session can be replayed.
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RosterSource for TestRoster {
    fn collect(&mut self) -> Result<Vec<Character>, BootstrapError> {
        tracing::info!(seed = self.seed, "Generating test roster");

        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(TEST_CHARACTERS
            .iter()
            .map(|name| Character::new(*name, rng.random_range(1..=20)))
            .collect())
    }
}

/// Line-based interactive collection.
///
/// Prompts for a name, then its initiative. A blank name or end of input
/// finishes the roster. An initiative that is not a whole number drops that
/// character and moves on to the next name.
pub struct PromptRoster<R, W> {
    input: R,
    output: W,
}

impl<R, W> PromptRoster<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` and reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, BootstrapError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R, W> RosterSource for PromptRoster<R, W>
where
    R: BufRead,
    W: Write,
{
    fn collect(&mut self) -> Result<Vec<Character>, BootstrapError> {
        let mut characters = Vec::new();

        loop {
            let name = match self.prompt("Character name (blank to finish): ")? {
                Some(name) if !name.is_empty() => name,
                _ => break,
            };

            let Some(raw) = self.prompt(&format!("Initiative for {name}: "))? else {
                break;
            };

            match raw.parse::<i32>() {
                Ok(initiative) => characters.push(Character::new(name, initiative)),
                Err(_) => {
                    tracing::warn!(%name, input = %raw, "Discarding character with invalid initiative");
                    writeln!(self.output, "Skipping {name}: {raw:?} is not a whole number")?;
                }
            }
        }

        tracing::info!(count = characters.len(), "Collected characters");
        Ok(characters)
    }
}
