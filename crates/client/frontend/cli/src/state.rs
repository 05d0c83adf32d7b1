//! Application state for mode management and pane focus.

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Tracker panes receive key presses.
    #[default]
    Normal,
    /// Key binding overlay; any key closes it.
    Help,
}

impl AppMode {
    /// Returns true if the mode draws on top of the panes.
    pub fn is_overlay(&self) -> bool {
        matches!(self, AppMode::Help)
    }
}

/// Mutable UI state shared by the event loop and the renderer.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Index of the pane receiving turn and selection commands.
    pub focus: usize,
    pane_count: usize,
}

impl AppState {
    pub fn new(pane_count: usize) -> Self {
        Self {
            mode: AppMode::Normal,
            focus: 0,
            pane_count: pane_count.max(1),
        }
    }

    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.pane_count;
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + self.pane_count - 1) % self.pane_count;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
    }

    pub fn is_focused(&self, pane: usize) -> bool {
        self.focus == pane
    }
}
