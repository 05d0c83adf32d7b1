//! Event loop orchestrating user input and rendering.
//!
//! The engine is notified synchronously inside each pane trigger, so by the
//! time a key press has been handled every pane holds a fresh view and a
//! single redraw shows all of them.

use std::rc::Rc;

use anyhow::Result;
use client_frontend_core::MessageLog;
use tokio::time::{self, Duration};

use crate::{
    config::CliConfig, input::InputHandler, pane::TrackerPane, presentation::terminal::Tui,
    state::AppState,
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the panes, the message log and UI state.
pub struct EventLoop {
    pub(crate) panes: Vec<Rc<TrackerPane>>,
    pub(crate) input: InputHandler,
    pub(crate) messages: MessageLog,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(panes: Vec<Rc<TrackerPane>>, messages: MessageLog, cli_config: CliConfig) -> Self {
        let app_state = AppState::new(panes.len());

        Self {
            panes,
            input: InputHandler::new(),
            messages,
            app_state,
            cli_config,
        }
    }

    /// Runs until the user quits, returning the message log.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<MessageLog> {
        self.render(terminal)?;

        let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            frames.tick().await;
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok(self.messages)
    }

    pub(crate) fn focused_pane(&self) -> Option<&Rc<TrackerPane>> {
        self.panes.get(self.app_state.focus)
    }
}
