//! src/nav/support.rs
//!
//! Support panel state: a selectable list of help entries.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::PanelAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportOption {
    pub title: &'static str,
    pub description: &'static str,
}

pub const OPTIONS: [SupportOption; 4] = [
    SupportOption {
        title: "Documentation",
        description: "View the documentation",
    },
    SupportOption {
        title: "FAQ",
        description: "Frequently Asked Questions",
    },
    SupportOption {
        title: "Report Bug",
        description: "Submit a bug report",
    },
    SupportOption {
        title: "Contact Us",
        description: "Get in touch with our team",
    },
];

#[derive(Debug, Default)]
pub struct SupportState {
    pub selected: usize,
}

impl SupportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [SupportOption] {
        &OPTIONS
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelAction {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1).min(OPTIONS.len() - 1)
            }
            KeyCode::Enter => debug!(option = OPTIONS[self.selected].title, "support entry selected"),
            _ => {}
        }
        PanelAction::None
    }
}
