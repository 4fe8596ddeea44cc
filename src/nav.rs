//! src/nav.rs
//!
//! Panel navigation: the closed set of panels, their per-panel state, and the
//! `Navigator` that keeps exactly one of them alive.

pub mod entry;
pub mod games;
pub mod settings;
pub mod support;
pub mod updates;

use crossterm::event::KeyEvent;
use tracing::info;

pub use entry::TextEntry;
pub use games::{GamesFocus, GamesState};
pub use settings::{Setting, SettingsState};
pub use support::{SupportOption, SupportState};
pub use updates::UpdatesState;

/// The panels reachable from the side menu, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Games,
    Settings,
    Updates,
    Creator,
    Support,
    Source,
}

impl PanelId {
    pub const ALL: [PanelId; 6] = [
        PanelId::Games,
        PanelId::Settings,
        PanelId::Updates,
        PanelId::Creator,
        PanelId::Support,
        PanelId::Source,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelId::Games => "Games",
            PanelId::Settings => "Settings",
            PanelId::Updates => "Updates",
            PanelId::Creator => "Creator",
            PanelId::Support => "Support",
            PanelId::Source => "Source",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Constructor for this panel's fresh state.
    pub fn builder(self) -> fn() -> ActivePanel {
        match self {
            PanelId::Games => || ActivePanel::Games(GamesState::new()),
            PanelId::Settings => || ActivePanel::Settings(SettingsState::new()),
            PanelId::Updates => || ActivePanel::Updates(UpdatesState::new()),
            PanelId::Creator => || ActivePanel::Creator,
            PanelId::Support => || ActivePanel::Support(SupportState::new()),
            PanelId::Source => || ActivePanel::Source,
        }
    }

    pub fn build(self) -> ActivePanel {
        (self.builder())()
    }
}

/// The live panel together with its state. Static panels carry none.
#[derive(Debug)]
pub enum ActivePanel {
    Games(GamesState),
    Settings(SettingsState),
    Updates(UpdatesState),
    Creator,
    Support(SupportState),
    Source,
}

impl ActivePanel {
    pub fn id(&self) -> PanelId {
        match self {
            ActivePanel::Games(_) => PanelId::Games,
            ActivePanel::Settings(_) => PanelId::Settings,
            ActivePanel::Updates(_) => PanelId::Updates,
            ActivePanel::Creator => PanelId::Creator,
            ActivePanel::Support(_) => PanelId::Support,
            ActivePanel::Source => PanelId::Source,
        }
    }

    /// Route a key to the panel while it has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> PanelAction {
        match self {
            ActivePanel::Games(state) => state.handle_key(key),
            ActivePanel::Settings(state) => state.handle_key(key),
            ActivePanel::Updates(state) => state.handle_key(key),
            ActivePanel::Support(state) => state.handle_key(key),
            ActivePanel::Creator | ActivePanel::Source => PanelAction::None,
        }
    }
}

/// Requests a panel makes of the app in response to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Launch,
    Browse,
}

/// Owns the single live panel.
#[derive(Debug)]
pub struct Navigator {
    active: ActivePanel,
}

impl Navigator {
    /// Starts on the Games panel.
    pub fn new() -> Self {
        Self {
            active: PanelId::Games.build(),
        }
    }

    /// Replace the live panel with a freshly built `id`.
    ///
    /// The old state is dropped by the assignment, even when `id` is already
    /// showing, so nothing typed or toggled survives a re-show.
    pub fn show(&mut self, id: PanelId) {
        info!(from = self.active.id().label(), to = id.label(), "show panel");
        self.active = id.build();
    }

    pub fn active(&self) -> &ActivePanel {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActivePanel {
        &mut self.active
    }

    pub fn current(&self) -> PanelId {
        self.active.id()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_order_round_trips_through_index() {
        for (i, id) in PanelId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(PanelId::from_index(i), Some(*id));
        }
        assert_eq!(PanelId::from_index(6), None);
    }

    #[test]
    fn builders_match_their_panel() {
        for id in PanelId::ALL {
            assert_eq!(id.build().id(), id);
        }
    }

    #[test]
    fn starts_on_games() {
        assert_eq!(Navigator::new().current(), PanelId::Games);
    }

    #[test]
    fn show_swaps_the_live_panel() {
        let mut nav = Navigator::new();
        nav.show(PanelId::Updates);
        assert_eq!(nav.current(), PanelId::Updates);
        assert!(matches!(nav.active(), ActivePanel::Updates(_)));
        nav.show(PanelId::Source);
        assert!(matches!(nav.active(), ActivePanel::Source));
    }

    #[test]
    fn every_transition_lands_on_the_requested_panel() {
        let mut nav = Navigator::new();
        for from in PanelId::ALL {
            for to in PanelId::ALL {
                nav.show(from);
                nav.show(to);
                assert_eq!(nav.current(), to, "{from:?} -> {to:?}");
                assert_eq!(nav.active().id(), to);
            }
        }
    }

    #[test]
    fn reshowing_rebuilds_state() {
        let mut nav = Navigator::new();
        if let ActivePanel::Games(games) = nav.active_mut() {
            games.path.set("/tmp/game.exe");
        }
        nav.show(PanelId::Settings);
        nav.show(PanelId::Games);
        match nav.active() {
            ActivePanel::Games(games) => assert!(games.path.is_empty()),
            other => panic!("unexpected panel {:?}", other.id()),
        }
    }
}
