//! src/panels/title.rs
//!
//! Header line with the launcher name.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use super::theme;

pub struct TitlePanel<'a> {
    pub title: &'a str,
}

impl<'a> TitlePanel<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl crate::ui::Panel for TitlePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.title)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(theme::frame(""));
        f.render_widget(p, area);
    }
}
