//! src/nav/games.rs
//!
//! Games panel state: the play button, the game path entry and the browse button.

use crossterm::event::{KeyCode, KeyEvent};

use super::PanelAction;
use super::entry::TextEntry;

/// Focusable widgets of the Games panel, in Tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamesFocus {
    Play,
    Path,
    Browse,
}

impl GamesFocus {
    fn next(self) -> Self {
        match self {
            GamesFocus::Play => GamesFocus::Path,
            GamesFocus::Path => GamesFocus::Browse,
            GamesFocus::Browse => GamesFocus::Play,
        }
    }

    fn prev(self) -> Self {
        match self {
            GamesFocus::Play => GamesFocus::Browse,
            GamesFocus::Path => GamesFocus::Play,
            GamesFocus::Browse => GamesFocus::Path,
        }
    }
}

#[derive(Debug)]
pub struct GamesState {
    pub path: TextEntry,
    pub focus: GamesFocus,
}

impl GamesState {
    pub fn new() -> Self {
        Self {
            path: TextEntry::new(),
            focus: GamesFocus::Play,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelAction {
        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                GamesFocus::Play => return PanelAction::Launch,
                GamesFocus::Browse => return PanelAction::Browse,
                GamesFocus::Path => {}
            },
            _ if self.focus == GamesFocus::Path => {
                self.path.handle_key(key);
            }
            _ => {}
        }
        PanelAction::None
    }
}

impl Default for GamesState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_cycles_focus() {
        let mut g = GamesState::new();
        assert_eq!(g.focus, GamesFocus::Play);
        g.handle_key(key(KeyCode::Tab));
        assert_eq!(g.focus, GamesFocus::Path);
        g.handle_key(key(KeyCode::Tab));
        g.handle_key(key(KeyCode::Tab));
        assert_eq!(g.focus, GamesFocus::Play);
        g.handle_key(key(KeyCode::BackTab));
        assert_eq!(g.focus, GamesFocus::Browse);
    }

    #[test]
    fn enter_on_buttons_requests_actions() {
        let mut g = GamesState::new();
        assert_eq!(g.handle_key(key(KeyCode::Enter)), PanelAction::Launch);
        g.focus = GamesFocus::Browse;
        assert_eq!(g.handle_key(key(KeyCode::Enter)), PanelAction::Browse);
        g.focus = GamesFocus::Path;
        assert_eq!(g.handle_key(key(KeyCode::Enter)), PanelAction::None);
    }

    #[test]
    fn only_the_path_field_takes_text() {
        let mut g = GamesState::new();
        g.handle_key(key(KeyCode::Char('x')));
        assert!(g.path.is_empty());
        g.focus = GamesFocus::Path;
        g.handle_key(key(KeyCode::Char('x')));
        assert_eq!(g.path.as_str(), "x");
    }
}
