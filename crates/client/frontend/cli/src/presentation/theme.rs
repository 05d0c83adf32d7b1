//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from frontend-core.

use client_frontend_core::{CardView, MessageLevel, PresentationMapper};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_card(&self, card: &CardView) -> Self::Style {
        let mut style = if card.is_dead() {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
        } else if card.is_current() {
            self.emphasize_current(Style::default().fg(Color::Black).bg(Color::Yellow))
        } else {
            Style::default().fg(Color::White)
        };

        if card.is_selected() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        style
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

impl RatatuiTheme {
    fn emphasize_current(&self, style: Style) -> Style {
        style.add_modifier(Modifier::BOLD)
    }

    /// Border style for a pane, brighter when it has focus.
    pub fn pane_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}
