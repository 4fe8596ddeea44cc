//! src/panels/user.rs
//!
//! User box in the bottom-left corner: UTC clock and login name.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::theme;

pub struct UserPanel<'a> {
    pub clock: &'a str,
    pub user: &'a str,
}

impl crate::ui::Panel for UserPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(format!(
                "Current Date and Time (UTC - YYYY-MM-DD HH:MM:SS formatted): {}",
                self.clock
            )),
            Line::from(Span::styled(
                format!("Current User's Login: {}", self.user),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        let p = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(theme::frame(""));
        f.render_widget(p, area);
    }
}
