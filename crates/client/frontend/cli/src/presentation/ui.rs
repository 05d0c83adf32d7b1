//! UI rendering entry point.
//!
//! Composes the header, one column per tracker pane, the message log and
//! the footer. The help overlay is drawn last, on top of everything.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};
use client_frontend_core::{MessageEntry, MessageLog, RosterView};

/// One pane's view, captured for a single frame.
pub struct PaneFrame {
    pub label: String,
    pub view: RosterView,
}

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub panes: &'a [PaneFrame],
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
    pub visible_messages: usize,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        render_tracker_ui(frame, ctx, &theme);

        if ctx.app_state.mode.is_overlay() {
            render_overlay_mode(frame, ctx);
        }
    })?;

    Ok(())
}

fn render_overlay_mode(frame: &mut ratatui::Frame, ctx: &RenderContext) {
    match ctx.app_state.mode {
        AppMode::Help => {
            let area = centered_rect(60, 70, frame.area());
            widgets::help::render(frame, area);
        }
        AppMode::Normal => {}
    }
}

fn render_tracker_ui(frame: &mut ratatui::Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Panes
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(3),                        // Footer
        ])
        .split(frame.area());

    // All panes observe the same engine, so any of them can feed the header.
    let summary = ctx.panes.first().map(|pane| pane.view.summary());
    widgets::header::render(frame, chunks[0], summary.as_ref(), ctx.app_state);

    if !ctx.panes.is_empty() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, ctx.panes.len() as u32);
                ctx.panes.len()
            ])
            .split(chunks[1]);

        for (index, (pane, area)) in ctx.panes.iter().zip(columns.iter()).enumerate() {
            widgets::roster::render(
                frame,
                *area,
                &pane.label,
                &pane.view,
                ctx.app_state.is_focused(index),
                theme,
            );
        }
    }

    let recent_messages: Vec<_> = if ctx.messages.is_empty() {
        vec![MessageEntry::info("No actions yet")]
    } else {
        ctx.messages.recent(ctx.visible_messages).cloned().collect()
    };
    widgets::messages::render(frame, chunks[2], &recent_messages, ctx.visible_messages, theme);

    widgets::footer::render(frame, chunks[3], ctx.app_state);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
