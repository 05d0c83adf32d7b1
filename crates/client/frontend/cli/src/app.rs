//! Glue code tying the shared engine and terminal UI together.
use std::rc::Rc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::pane::TrackerPane;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, MessageLog};
use tracker_core::SharedTracker;

/// Terminal frontend showing several synchronized tracker panes.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    /// Creates and subscribes one pane per configured view.
    fn attach_panes(&self, tracker: &SharedTracker) -> Vec<Rc<TrackerPane>> {
        (1..=self.frontend_config.views.pane_count)
            .map(|number| TrackerPane::attach(format!("View {number}"), tracker))
            .collect()
    }

    async fn execute(&self, tracker: SharedTracker) -> Result<()> {
        tracing::info!("CLI client starting...");

        let panes = self.attach_panes(&tracker);

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        {
            let engine = tracker.borrow();
            messages.push_text(format!(
                "{} characters ready, {} views",
                engine.len(),
                panes.len()
            ));
            if let Some(current) = engine.state().current() {
                messages.push_text(format!("{}'s turn", current.name));
            }
        }

        // Initial render: push the starting state through every pane.
        if let Err(error) = tracker.borrow_mut().notify_all() {
            tracing::warn!(error = %error, "Initial refresh failed");
            messages.push(client_frontend_core::format::describe_error(&error));
        }

        let mut terminal = terminal::init().context("Failed to initialize terminal")?;
        let guard = terminal::TerminalGuard::new();

        let event_loop = EventLoop::new(panes, messages, self.cli_config.clone());
        let messages = event_loop.run(&mut terminal).await?;

        guard.finish()?;
        if let Some(last) = messages.latest() {
            tracing::info!(last = %last.text, "Last tracker message");
        }
        tracing::info!(messages = messages.len(), "CLI client exiting");

        Ok(())
    }
}

#[async_trait(?Send)]
impl Frontend for CliFrontend {
    async fn run(&mut self, tracker: SharedTracker) -> Result<()> {
        self.execute(tracker).await
    }
}
