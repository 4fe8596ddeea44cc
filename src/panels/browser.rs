//! src/panels/browser.rs
//!
//! File picker overlay listing directories and executables.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::theme;
use crate::browse::{BrowserState, EntryKind};

pub struct BrowserPanel<'a> {
    pub state: &'a BrowserState,
}

impl crate::ui::Panel for BrowserPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::TEXT))
            .title(format!(" Select game (*.{}) ", self.state.extension()))
            .title_bottom(" Enter=open/select  Backspace=up  Esc=cancel ")
            .style(Style::default().bg(theme::FRAME_BG).fg(theme::TEXT));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        f.render_widget(
            Paragraph::new(self.state.dir.display().to_string())
                .style(Style::default().fg(theme::MUTED)),
            header,
        );

        let listing = match &self.state.listing {
            Ok(listing) => listing,
            Err(e) => {
                f.render_widget(
                    Paragraph::new(e.to_string())
                        .style(Style::default().fg(theme::ERROR_RED))
                        .wrap(Wrap { trim: true }),
                    body,
                );
                return;
            }
        };

        let items: Vec<ListItem> = listing
            .entries
            .iter()
            .map(|entry| {
                let line = match entry.kind {
                    EntryKind::Parent => Line::from(Span::styled("..", Style::default().fg(theme::MUTED))),
                    EntryKind::Dir => Line::from(Span::styled(
                        format!("{}/", entry.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    EntryKind::File => Line::from(entry.name.as_str()),
                };
                ListItem::new(line)
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(theme::HOVER_BG).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(Some(self.state.selected));
        f.render_stateful_widget(list, body, &mut list_state);
    }
}
