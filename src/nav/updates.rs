//! src/nav/updates.rs
//!
//! Updates panel state. "Check for Updates" only changes the status line;
//! there is no update server.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use super::PanelAction;

pub const UP_TO_DATE: &str = "Your software is up to date!";
pub const CHECKING: &str = "Checking for updates...";

#[derive(Debug)]
pub struct UpdatesState {
    pub status: &'static str,
}

impl UpdatesState {
    pub fn new() -> Self {
        Self { status: UP_TO_DATE }
    }

    pub fn check(&mut self) {
        info!("update check requested");
        self.status = CHECKING;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelAction {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.check();
        }
        PanelAction::None
    }
}

impl Default for UpdatesState {
    fn default() -> Self {
        Self::new()
    }
}
