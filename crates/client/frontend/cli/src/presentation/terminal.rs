//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Interactive roster entry must finish before this is called; prompts
/// read cooked stdin.
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal on drop, including when the loop bails out with `?`.
///
/// Call [`TerminalGuard::finish`] on the normal exit path to surface restore
/// errors; the guard then does nothing on drop.
pub struct TerminalGuard {
    armed: bool,
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self { armed: true }
    }

    /// Restores the terminal once; later calls and the drop are no-ops.
    pub fn finish(mut self) -> Result<()> {
        if self.disarm() { restore() } else { Ok(()) }
    }

    /// Returns whether the guard was still armed.
    fn disarm(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = restore();
        }
    }
}
