//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod background;
pub mod browser;
pub mod dialog;
pub mod games;
pub mod menu;
pub mod paragraph;
pub mod settings;
pub mod support;
pub mod theme;
pub mod title;
pub mod updates;
pub mod user;

pub use background::FieldPanel;
pub use browser::BrowserPanel;
pub use dialog::{Dialog, DialogPanel};
pub use games::GamesPanel;
pub use menu::MenuPanel;
pub use paragraph::ParagraphPanel;
pub use settings::SettingsPanel;
pub use support::SupportPanel;
pub use title::TitlePanel;
pub use updates::UpdatesPanel;
pub use user::UserPanel;
