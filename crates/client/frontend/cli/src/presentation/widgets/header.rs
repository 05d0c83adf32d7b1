//! Header widget displaying whose turn it is.

use client_frontend_core::TurnSummary;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

/// Render the header panel with the current character and living count.
pub fn render(frame: &mut Frame, area: Rect, summary: Option<&TurnSummary>, app_state: &AppState) {
    let (current, living, total) = match summary {
        Some(summary) => (
            summary.current.clone().unwrap_or_else(|| "nobody".to_string()),
            summary.living,
            summary.total,
        ),
        None => ("nobody".to_string(), 0, 0),
    };

    let text = vec![Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(
            current,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Alive: "),
        Span::styled(
            format!("{living}/{total}"),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw(" | View: "),
        Span::styled(
            format!("{}/{}", app_state.focus + 1, app_state.pane_count()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Initiative"));

    frame.render_widget(paragraph, area);
}
