//! Roster widget: one pane's initiative list.

use client_frontend_core::{CardView, PresentationMapper, RosterView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::presentation::theme::RatatuiTheme;

/// Render a pane's cards in initiative order.
///
/// The list state is rebuilt each frame with the selected row, which the
/// pane snaps to the current card on every turn change, so the current
/// character scrolls into view.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    view: &RosterView,
    focused: bool,
    theme: &RatatuiTheme,
) {
    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| ListItem::new(card_line(card, theme)).style(theme.style_card(card)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.pane_border(focused))
        .title(format!(" {label} "));

    let list = if items.is_empty() {
        List::new(vec![ListItem::new("No characters")]).block(block)
    } else {
        List::new(items).block(block)
    };

    let selected = view
        .cards
        .iter()
        .position(CardView::is_selected)
        .or(view.current);
    let mut state = ListState::default().with_selected(selected);

    frame.render_stateful_widget(list, area, &mut state);
}

fn card_line<'a>(card: &'a CardView, theme: &RatatuiTheme) -> Line<'a> {
    let mut spans = vec![
        Span::raw(format!("{:>3}  ", card.initiative)),
        Span::raw(card.label.as_str()),
    ];

    if card.is_current() {
        spans.push(Span::styled(
            format!("  << {}", theme.turn_marker()),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
    }

    Line::from(spans)
}
