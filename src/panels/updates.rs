//! src/panels/updates.rs
//!
//! Updates panel: current version, status line and a check button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::Style,
    widgets::Paragraph,
};

use super::theme;
use crate::nav::UpdatesState;
use crate::nav::updates::UP_TO_DATE;

pub struct UpdatesPanel<'a> {
    pub state: &'a UpdatesState,
    pub version: &'a str,
    pub focused: bool,
}

impl crate::ui::Panel for UpdatesPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(theme::frame("Updates"), area);
        let inner = area.inner(Margin::new(4, 2));

        let [version, _, status, _, button] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        let version_line = Paragraph::new(format!("Current Version: {}", self.version))
            .alignment(Alignment::Center)
            .block(theme::frame("").style(Style::default().bg(theme::ROW_BG)));
        f.render_widget(version_line, version);

        let colour = if self.state.status == UP_TO_DATE {
            theme::OK_GREEN
        } else {
            theme::MUTED
        };
        f.render_widget(
            Paragraph::new(self.state.status)
                .alignment(Alignment::Center)
                .style(Style::default().fg(colour)),
            status,
        );

        let [button] = Layout::horizontal([Constraint::Length(24)])
            .flex(Flex::Center)
            .areas(button);
        f.render_widget(theme::button("Check for Updates", self.focused), button);
    }
}
