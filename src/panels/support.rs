//! src/panels/support.rs
//!
//! Support panel: help entries with a short description each.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::nav::SupportState;

pub struct SupportPanel<'a> {
    pub state: &'a SupportState,
    pub focused: bool,
}

impl crate::ui::Panel for SupportPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(theme::frame("Support"), area);
        let inner = area.inner(Margin::new(4, 2));
        let options = self.state.options();

        let rows = Layout::vertical(options.iter().map(|_| Constraint::Length(3)))
            .spacing(1)
            .split(inner);
        for (i, (option, row)) in options.iter().zip(rows.iter()).enumerate() {
            let selected = self.focused && i == self.state.selected;
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<16}", option.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(option.description, Style::default().fg(theme::MUTED)),
            ]);
            f.render_widget(Paragraph::new("").style(theme::row_style(selected)), *row);
            f.render_widget(
                Paragraph::new(line).style(theme::row_style(selected)),
                row.inner(Margin::new(2, 1)),
            );
        }
    }
}
