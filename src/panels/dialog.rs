//! src/panels/dialog.rs
//!
//! Modal error dialog. While one is open it takes every key; Enter or Esc
//! closes it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// True when the key dismisses the dialog.
    pub fn dismissed_by(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc)
    }
}

pub struct DialogPanel<'a> {
    pub dialog: &'a Dialog,
}

impl crate::ui::Panel for DialogPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(theme::ERROR_RED))
            .title(format!(" {} ", self.dialog.title))
            .style(Style::default().bg(theme::FRAME_BG).fg(theme::TEXT));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [message, ok] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        f.render_widget(
            Paragraph::new(self.dialog.message.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            message,
        );
        f.render_widget(
            Paragraph::new(Line::from("[ OK ]"))
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)),
            ok,
        );
    }
}
