//! src/panels/theme.rs
//!
//! Shared colours and the few building blocks every panel uses.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const FRAME_BG: Color = Color::Rgb(16, 16, 16);
pub const ROW_BG: Color = Color::Rgb(26, 26, 26);
pub const BUTTON_BG: Color = Color::Rgb(31, 31, 31);
pub const HOVER_BG: Color = Color::Rgb(45, 45, 45);
pub const BORDER: Color = Color::Rgb(45, 45, 45);
pub const OK_GREEN: Color = Color::Rgb(0, 170, 0);
pub const MUTED: Color = Color::Rgb(136, 136, 136);
pub const TEXT: Color = Color::White;
pub const ERROR_RED: Color = Color::Rgb(200, 60, 60);

/// Rounded frame with an opaque background; the field only shows around it.
pub fn frame(title: &str) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .style(Style::default().bg(FRAME_BG).fg(TEXT));
    if title.is_empty() {
        block
    } else {
        block.title(format!(" {title} "))
    }
}

/// A bordered, centered label that lights up when focused.
pub fn button(label: &str, focused: bool) -> Paragraph<'_> {
    let (bg, border) = if focused {
        (HOVER_BG, TEXT)
    } else {
        (BUTTON_BG, BORDER)
    };
    let mut style = Style::default().bg(bg).fg(TEXT).add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Paragraph::new(label).alignment(Alignment::Center).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    )
}

/// Row highlight for list-like panels.
pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(HOVER_BG).fg(TEXT)
    } else {
        Style::default().bg(ROW_BG).fg(TEXT)
    }
}
