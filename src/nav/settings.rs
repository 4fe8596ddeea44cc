//! src/nav/settings.rs
//!
//! Settings panel state. The toggles live only as long as the panel does;
//! nothing is written anywhere.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use super::PanelAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug)]
pub struct SettingsState {
    pub settings: Vec<Setting>,
    pub selected: usize,
}

impl SettingsState {
    pub fn new() -> Self {
        let defaults = [
            ("Auto-Launch on Startup", false),
            ("Always on Top", true),
            ("Dark Mode", true),
        ];
        Self {
            settings: defaults
                .into_iter()
                .map(|(label, enabled)| Setting { label, enabled })
                .collect(),
            selected: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelAction {
        let last = self.settings.len().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Tab => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(setting) = self.settings.get_mut(self.selected) {
                    setting.enabled = !setting.enabled;
                    info!(setting = setting.label, enabled = setting.enabled, "setting toggled");
                }
            }
            _ => {}
        }
        PanelAction::None
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}
