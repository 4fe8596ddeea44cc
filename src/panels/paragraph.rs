//! src/panels/paragraph.rs
//!
//! Simple paragraph panel used for static text blocks (credits, source link,
//! key help).

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Text,
    widgets::{Padding, Paragraph, Wrap},
};

use super::theme;

/// Small reusable paragraph panel.
pub struct ParagraphPanel {
    pub text: String,
    pub title: String,
    pub alignment: Alignment,
    /// Blank lines above the text.
    pub top_padding: u16,
}

impl ParagraphPanel {
    pub fn new(text: &str, title: &str) -> Self {
        Self {
            text: text.to_string(),
            title: title.to_string(),
            alignment: Alignment::Left,
            top_padding: 0,
        }
    }

    /// Centered text pushed a little down, for the static content panels.
    pub fn centered(text: &str, title: &str) -> Self {
        Self {
            alignment: Alignment::Center,
            top_padding: 2,
            ..Self::new(text, title)
        }
    }
}

impl crate::ui::Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(Text::raw(self.text.as_str()))
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .block(theme::frame(&self.title).padding(Padding::top(self.top_padding)));
        f.render_widget(p, area);
    }
}
