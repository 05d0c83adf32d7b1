//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let text = match app_state.mode {
        AppMode::Normal => vec![Line::from(vec![
            Span::raw("[n/Space/→] Next | "),
            Span::raw("[b/←] Back | "),
            Span::raw("[j/k/↑/↓] Select | "),
            Span::raw("[d/x/Enter] Dead | "),
            Span::raw("[Tab] View | "),
            Span::raw("[?] Help | "),
            Span::raw("[q] Quit"),
        ])],
        AppMode::Help => vec![Line::from(vec![Span::raw("[any key] Close help")])],
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
