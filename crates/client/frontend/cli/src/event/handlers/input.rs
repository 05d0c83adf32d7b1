//! Input handling (keyboard commands routed to the focused pane).

use anyhow::Result;
use client_frontend_core::{MessageEntry, format};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;
use tracker_core::TrackerError;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let action = self.input.handle_key(key, &self.app_state.mode);

        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return Ok(true);
            }
            KeyAction::None => return Ok(false),
            KeyAction::FocusNext => self.app_state.focus_next(),
            KeyAction::FocusPrevious => self.app_state.focus_previous(),
            KeyAction::ToggleHelp => self.app_state.toggle_help(),
            KeyAction::SelectNext | KeyAction::SelectPrevious => self.move_selection(action),
            KeyAction::NextTurn | KeyAction::PreviousTurn | KeyAction::ToggleDead => {
                let result = self.dispatch(action);
                self.record(result);
            }
        }

        self.render(terminal)?;
        Ok(false)
    }

    fn move_selection(&mut self, action: KeyAction) {
        let Some(pane) = self.focused_pane() else {
            return;
        };

        if action == KeyAction::SelectNext {
            pane.select_next();
        } else {
            pane.select_previous();
        }
    }

    /// Runs an engine command through the focused pane.
    fn dispatch(&self, action: KeyAction) -> Result<Vec<MessageEntry>, TrackerError> {
        let Some(pane) = self.focused_pane() else {
            return Ok(Vec::new());
        };

        tracing::debug!(pane = %pane.label(), ?action, "Dispatching command");

        match action {
            KeyAction::NextTurn => pane.next_turn(),
            KeyAction::PreviousTurn => pane.previous_turn(),
            KeyAction::ToggleDead => pane.toggle_selected(),
            _ => Ok(Vec::new()),
        }
    }

    fn record(&mut self, result: Result<Vec<MessageEntry>, TrackerError>) {
        match result {
            Ok(entries) => entries.into_iter().for_each(|entry| self.messages.push(entry)),
            Err(error) => {
                tracing::warn!(
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    error = %error,
                    "Tracker command failed"
                );
                self.messages.push(format::describe_error(&error));
            }
        }
    }
}
