//! Key binding overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BINDINGS: [(&str, &str); 9] = [
    ("n, Space, →", "next living character"),
    ("b, ←", "previous living character"),
    ("j, ↓", "select next row"),
    ("k, ↑", "select previous row"),
    ("d, x, Enter", "toggle dead on selected row"),
    ("Tab", "focus next view"),
    ("Shift-Tab", "focus previous view"),
    ("?", "toggle this help"),
    ("q, Esc, Ctrl-C", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{keys:>16}  "), key_style),
                Span::raw(*description),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Keys "));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
