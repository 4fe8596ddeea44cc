//! src/panels/games.rs
//!
//! Games panel: game title, PLAY GAME button, and the path row (entry + Browse).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme;
use crate::nav::{GamesFocus, GamesState, TextEntry};

const PLACEHOLDER: &str = "Select game path...";

pub struct GamesPanel<'a> {
    pub state: &'a GamesState,
    pub game_title: &'a str,
    /// Content area has keyboard focus, so the focused widget is highlighted.
    pub focused: bool,
}

impl GamesPanel<'_> {
    fn has_focus(&self, widget: GamesFocus) -> bool {
        self.focused && self.state.focus == widget
    }

    fn draw_entry(&self, f: &mut Frame<'_>, area: Rect) {
        let focused = self.has_focus(GamesFocus::Path);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { theme::TEXT } else { theme::BORDER }))
            .style(Style::default().bg(theme::FRAME_BG));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let entry: &TextEntry = &self.state.path;
        if entry.is_empty() {
            let hint = Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme::MUTED));
            f.render_widget(hint, inner);
            if focused {
                f.set_cursor_position(Position::new(inner.x, inner.y));
            }
        } else {
            let (visible, offset) = visible_window(entry, inner.width as usize);
            f.render_widget(Paragraph::new(visible), inner);
            if focused {
                let x = inner.x + (entry.cursor() - offset) as u16;
                f.set_cursor_position(Position::new(x, inner.y));
            }
        }
    }
}

/// Slice of the entry text that keeps the cursor visible in `width` cells.
/// Returns the text and the char offset it starts at.
fn visible_window(entry: &TextEntry, width: usize) -> (String, usize) {
    let width = width.max(1);
    let offset = (entry.cursor() + 1).saturating_sub(width);
    let text = entry.as_str().chars().skip(offset).take(width).collect();
    (text, offset)
}

impl crate::ui::Panel for GamesPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(theme::frame("Games"), area);
        let inner = area.inner(Margin::new(4, 1));

        let [_, title, _, play, _, path_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Length(5),
        ])
        .areas(inner);

        let heading = Paragraph::new(Line::from(Span::styled(
            self.game_title.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(heading, title);

        let [play_button] = Layout::horizontal([Constraint::Length(40)])
            .flex(Flex::Center)
            .areas(play);
        f.render_widget(
            theme::button("\nPLAY GAME", self.has_focus(GamesFocus::Play)),
            play_button,
        );

        let row_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::ROW_BG));
        let row_inner = row_block.inner(path_row);
        f.render_widget(row_block, path_row);

        let [label, entry, browse] = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(12),
        ])
        .spacing(1)
        .areas(row_inner);
        let label_line = Paragraph::new("\nGame Path:").alignment(Alignment::Right);
        f.render_widget(label_line, label);
        self.draw_entry(f, entry);
        f.render_widget(
            theme::button("Browse", self.has_focus(GamesFocus::Browse)),
            browse,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_cursor() {
        let mut entry = TextEntry::new();
        entry.set("/home/player/games/really-long-name.exe");
        let (text, offset) = visible_window(&entry, 10);
        assert_eq!(text.chars().count(), 9);
        assert_eq!(offset, entry.cursor() + 1 - 10);
        assert!(text.ends_with("exe"));
    }

    #[test]
    fn short_text_is_shown_whole() {
        let mut entry = TextEntry::new();
        entry.set("a.exe");
        assert_eq!(visible_window(&entry, 20), ("a.exe".to_string(), 0));
    }
}
