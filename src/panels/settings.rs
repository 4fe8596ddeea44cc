//! src/panels/settings.rs
//!
//! Settings panel: one row per toggle with an ON/OFF switch.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::nav::SettingsState;

pub struct SettingsPanel<'a> {
    pub state: &'a SettingsState,
    pub focused: bool,
}

impl crate::ui::Panel for SettingsPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(theme::frame("Settings"), area);
        let inner = area.inner(Margin::new(4, 2));

        let rows = Layout::vertical(self.state.settings.iter().map(|_| Constraint::Length(3)))
            .spacing(1)
            .split(inner);
        for (i, (setting, row)) in self.state.settings.iter().zip(rows.iter()).enumerate() {
            let selected = self.focused && i == self.state.selected;
            let switch = if setting.enabled {
                Span::styled(
                    " ON  ",
                    Style::default()
                        .bg(theme::OK_GREEN)
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(" OFF ", Style::default().bg(theme::HOVER_BG).fg(theme::MUTED))
            };

            let [label_area, switch_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(7)])
                    .areas(row.inner(Margin::new(2, 1)));
            f.render_widget(Paragraph::new("").style(theme::row_style(selected)), *row);
            f.render_widget(
                Paragraph::new(setting.label).style(theme::row_style(selected)),
                label_area,
            );
            f.render_widget(Paragraph::new(Line::from(switch)), switch_area);
        }
    }
}
