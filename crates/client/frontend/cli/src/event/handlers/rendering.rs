//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render every pane from its last refreshed view.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let views: Vec<_> = self
            .panes
            .iter()
            .map(|pane| ui::PaneFrame {
                label: pane.label().to_string(),
                view: pane.snapshot(),
            })
            .collect();

        let ctx = ui::RenderContext {
            panes: &views,
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
            visible_messages: self.cli_config.ui.visible_messages(),
        };

        ui::render(terminal, &ctx)
    }
}
