//! src/panels/menu.rs
//!
//! Side menu: one button per panel. The cursor row is highlighted while the
//! menu has focus; the panel currently shown is marked.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
};

use super::theme;
use crate::nav::PanelId;

pub struct MenuPanel {
    pub cursor: usize,
    pub current: PanelId,
    pub focused: bool,
}

impl crate::ui::Panel for MenuPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(theme::frame("Menu"), area);
        let inner = area.inner(Margin::new(2, 1));

        let rows = Layout::vertical(PanelId::ALL.map(|_| Constraint::Length(3)))
            .spacing(1)
            .split(inner);
        for (i, (id, row)) in PanelId::ALL.iter().zip(rows.iter()).enumerate() {
            let label = if *id == self.current {
                format!("> {} <", id.label())
            } else {
                id.label().to_string()
            };
            let highlighted = self.focused && i == self.cursor;
            f.render_widget(theme::button(&label, highlighted), *row);
        }
    }
}
