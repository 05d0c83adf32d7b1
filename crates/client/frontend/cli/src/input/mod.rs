//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Advance the shared turn order.
    NextTurn,
    /// Step the shared turn order back.
    PreviousTurn,
    /// Move the focused pane's selection down.
    SelectNext,
    /// Move the focused pane's selection up.
    SelectPrevious,
    /// Flip the dead flag of the focused pane's selection.
    ToggleDead,
    FocusNext,
    FocusPrevious,
    ToggleHelp,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into tracker commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        // Raw mode delivers Ctrl-C as a key press instead of a signal.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Help => KeyAction::ToggleHelp,
            AppMode::Normal => self.normal_key(key),
        }
    }

    fn normal_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Right => KeyAction::NextTurn,
            KeyCode::Left => KeyAction::PreviousTurn,
            KeyCode::Down => KeyAction::SelectNext,
            KeyCode::Up => KeyAction::SelectPrevious,
            KeyCode::Enter => KeyAction::ToggleDead,
            KeyCode::Tab => KeyAction::FocusNext,
            KeyCode::BackTab => KeyAction::FocusPrevious,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'n' | ' ' => KeyAction::NextTurn,
            'b' => KeyAction::PreviousTurn,
            'j' => KeyAction::SelectNext,
            'k' => KeyAction::SelectPrevious,
            'd' | 'x' => KeyAction::ToggleDead,
            '?' => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_turn_keys() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(handler.handle_key(key(KeyCode::Char('n')), &mode), KeyAction::NextTurn);
        assert_eq!(handler.handle_key(key(KeyCode::Char(' ')), &mode), KeyAction::NextTurn);
        assert_eq!(handler.handle_key(key(KeyCode::Right), &mode), KeyAction::NextTurn);
        assert_eq!(handler.handle_key(key(KeyCode::Char('B')), &mode), KeyAction::PreviousTurn);
        assert_eq!(handler.handle_key(key(KeyCode::Left), &mode), KeyAction::PreviousTurn);
    }

    #[test]
    fn maps_selection_and_toggle() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(handler.handle_key(key(KeyCode::Char('j')), &mode), KeyAction::SelectNext);
        assert_eq!(handler.handle_key(key(KeyCode::Up), &mode), KeyAction::SelectPrevious);
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &mode), KeyAction::ToggleDead);
        assert_eq!(handler.handle_key(key(KeyCode::Char('x')), &mode), KeyAction::ToggleDead);
        assert_eq!(handler.handle_key(key(KeyCode::BackTab), &mode), KeyAction::FocusPrevious);
    }

    #[test]
    fn maps_quit_and_ctrl_c() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };

        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &AppMode::Normal), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), &AppMode::Normal), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl_c, &AppMode::Help), KeyAction::Quit);
    }

    #[test]
    fn help_mode_closes_on_any_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('n')), &AppMode::Help), KeyAction::ToggleHelp);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('z')), &AppMode::Normal), KeyAction::None);
    }
}
