//! src/app.rs
//!
//! # Top-Level Application (`app.rs`)
//!
//! Game launcher shell drawn in the terminal over an animated particle
//! background.
//!
//! ## Overview
//! The application:
//! - Animates a particle field behind everything (see `field`).
//! - Shows a side menu and one content panel at a time (see `nav`).
//! - Keeps a UTC clock and the user's login in the bottom-left box.
//! - Launches the chosen game executable as a detached process.
//!
//! Everything runs on one thread. The loop draws, waits for input until the
//! next recurring task is due, then runs whichever tasks are due: the field
//! tick (50 ms by default) and the clock refresh (1 s).
//!
//! # Keyboard Controls
//!
//! - **Ctrl+C**: Quit from anywhere.
//! - **q**: Quit while the menu has focus.
//! - **Up / Down**: Move through the menu; **Enter** shows the panel.
//! - **1..6**: Jump straight to a panel.
//! - **Tab**: Move focus into the content panel, then cycle its widgets.
//! - **Esc**: Return focus to the menu.
//!
//! Inside the Games panel, Enter on **PLAY GAME** launches the path in the
//! entry, Enter on **Browse** opens the file picker. A path without the
//! executable extension, or a spawn failure, opens a modal error dialog that
//! Enter or Esc dismisses.

use std::time::Instant;

use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Margin, Rect, Size};
use tracing::{debug, info};

use crate::browse::{BrowseOutcome, BrowserState};
use crate::config::LauncherConfig;
use crate::field::{ParticleField, Viewport};
use crate::launch::{self, Spawner, SystemSpawner};
use crate::nav::{ActivePanel, Navigator, PanelAction, PanelId};
use crate::panels::{
    BrowserPanel, Dialog, DialogPanel, FieldPanel, GamesPanel, MenuPanel, ParagraphPanel,
    SettingsPanel, SupportPanel, TitlePanel, UpdatesPanel, UserPanel,
};
use crate::schedule::Ticker;
use crate::ui::{Node, group, leaf, opaque, popup, stack};

const CONTROLS: &str = "Up/Down=Menu  Enter=Select  Tab=Focus panel  Esc=Back to menu  Q=Quit";

/// Which side of the shell receives keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Menu,
    Content,
}

pub struct App {
    config: LauncherConfig,
    field: ParticleField,
    viewport: Viewport,
    nav: Navigator,
    focus: Focus,
    menu_cursor: usize,
    browser: Option<BrowserState>,
    dialog: Option<Dialog>,
    clock: String,
    spawner: Box<dyn Spawner>,
    running: bool,
}

impl App {
    pub fn new(config: LauncherConfig, viewport: Viewport, spawner: Box<dyn Spawner>) -> Self {
        let field = ParticleField::new(config.field.clone(), viewport);
        Self {
            config,
            field,
            viewport,
            nav: Navigator::new(),
            focus: Focus::Menu,
            menu_cursor: 0,
            browser: None,
            dialog: None,
            clock: String::new(),
            spawner,
            running: true,
        }
    }

    pub fn viewport_for(&self, size: Size) -> Option<Viewport> {
        viewport_for(size, self.config.cell_size)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(
                width = viewport.width(),
                height = viewport.height(),
                "viewport resized"
            );
            self.viewport = viewport;
        }
    }

    /// One field tick against the current viewport.
    pub fn tick_field(&mut self) {
        self.field.tick(self.viewport);
    }

    pub fn refresh_clock(&mut self, now: DateTime<Utc>) {
        self.clock = now.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn browser(&self) -> Option<&BrowserState> {
        self.browser.as_ref()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    /// Text currently in the Games panel's path entry, if that panel is live.
    pub fn game_path(&self) -> Option<&str> {
        match self.nav.active() {
            ActivePanel::Games(games) => Some(games.path.as_str()),
            _ => None,
        }
    }

    /// Show `id`, keeping the menu cursor in step.
    pub fn show(&mut self, id: PanelId) {
        self.nav.show(id);
        self.menu_cursor = id.index();
    }

    /// Dispatch one key press. Overlays take precedence: an open dialog
    /// swallows everything, then the file picker, then the focused side.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.dialog.is_some() {
            if Dialog::dismissed_by(&key) {
                self.dialog = None;
            }
            return;
        }

        if let Some(browser) = self.browser.as_mut() {
            match browser.handle_key(key) {
                BrowseOutcome::Pending => {}
                BrowseOutcome::Cancelled => self.browser = None,
                BrowseOutcome::Picked(path) => {
                    self.browser = None;
                    self.set_game_path(&path.to_string_lossy());
                }
            }
            return;
        }

        match self.focus {
            Focus::Menu => self.handle_menu_key(key),
            Focus::Content => self.handle_content_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let last = PanelId::ALL.len() - 1;
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Up => self.menu_cursor = self.menu_cursor.saturating_sub(1),
            KeyCode::Down => self.menu_cursor = (self.menu_cursor + 1).min(last),
            KeyCode::Enter => {
                if let Some(id) = PanelId::from_index(self.menu_cursor) {
                    self.show(id);
                }
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(id) = PanelId::from_index(index) {
                    self.show(id);
                }
            }
            KeyCode::Tab | KeyCode::Right => self.focus = Focus::Content,
            _ => {}
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.focus = Focus::Menu;
            return;
        }
        match self.nav.active_mut().handle_key(key) {
            PanelAction::None => {}
            PanelAction::Launch => self.play_game(),
            PanelAction::Browse => self.open_browser(),
        }
    }

    fn set_game_path(&mut self, path: &str) {
        if let ActivePanel::Games(games) = self.nav.active_mut() {
            games.path.set(path);
        }
    }

    fn open_browser(&mut self) {
        let start = BrowserState::start_dir(self.game_path().unwrap_or(""));
        info!(dir = %start.display(), "opening file picker");
        self.browser = Some(BrowserState::open(&start, &self.config.executable_extension));
    }

    /// Launch whatever is in the path entry; failures become an error dialog.
    fn play_game(&mut self) {
        let path = self.game_path().unwrap_or("").to_string();
        let result = launch::launch(
            &path,
            &self.config.executable_extension,
            self.spawner.as_mut(),
        );
        if let Err(e) = result {
            self.dialog = Some(Dialog::error(e.to_string()));
        }
    }

    fn content_node(&self) -> Node<'_> {
        let focused = self.focus == Focus::Content;
        match self.nav.active() {
            ActivePanel::Games(state) => leaf(GamesPanel {
                state,
                game_title: &self.config.game_title,
                focused,
            }),
            ActivePanel::Settings(state) => leaf(SettingsPanel { state, focused }),
            ActivePanel::Updates(state) => leaf(UpdatesPanel {
                state,
                version: &self.config.version,
                focused,
            }),
            ActivePanel::Creator => leaf(ParagraphPanel::centered(
                &format!(
                    "Created by {}\nVersion {}",
                    self.config.author, self.config.version
                ),
                "Creator",
            )),
            ActivePanel::Support(state) => leaf(SupportPanel { state, focused }),
            ActivePanel::Source => leaf(ParagraphPanel::centered(
                &format!("Source Code\n{}", self.config.source_url),
                "Source",
            )),
        }
    }

    /// Build the node tree for this frame.
    pub fn layout(&self) -> Node<'_> {
        let shell = group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(5),
            ],
            vec![
                opaque(leaf(TitlePanel::new(&self.config.title))),
                group(
                    Direction::Horizontal,
                    vec![Constraint::Length(22), Constraint::Min(0)],
                    vec![
                        opaque(leaf(MenuPanel {
                            cursor: self.menu_cursor,
                            current: self.nav.current(),
                            focused: self.focus == Focus::Menu,
                        })),
                        opaque(self.content_node()),
                    ],
                ),
                group(
                    Direction::Horizontal,
                    vec![Constraint::Length(88), Constraint::Min(0)],
                    vec![
                        opaque(leaf(UserPanel {
                            clock: &self.clock,
                            user: &self.config.user,
                        })),
                        opaque(leaf(ParagraphPanel::new(CONTROLS, "Controls"))),
                    ],
                ),
            ],
        );

        let mut layers = vec![
            leaf(FieldPanel::new(self.field.frame(), self.viewport)),
            margin(shell),
        ];
        if let Some(browser) = &self.browser {
            layers.push(popup(70, 20, leaf(BrowserPanel { state: browser })));
        }
        if let Some(dialog) = &self.dialog {
            layers.push(popup(60, 8, leaf(DialogPanel { dialog })));
        }
        stack(layers)
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        self.layout().draw(f, f.area());
    }
}

/// Map a terminal size onto the field's coordinate space, `cell_size` virtual
/// pixels per cell. `None` while the terminal has no area.
pub fn viewport_for(size: Size, cell_size: (u32, u32)) -> Option<Viewport> {
    let (cw, ch) = cell_size;
    Viewport::new(
        u32::from(size.width).saturating_mul(cw.max(1)),
        u32::from(size.height).saturating_mul(ch.max(1)),
    )
}

/// Leave a thin border of background visible around the shell.
fn margin(node: Node<'_>) -> Node<'_> {
    struct Inset<'a>(Node<'a>);

    impl crate::ui::Panel for Inset<'_> {
        fn draw(&self, f: &mut Frame<'_>, area: Rect) {
            self.0.draw(f, area.inner(Margin::new(2, 1)));
        }
    }

    leaf(Inset(node))
}

/// Set up the terminal and run the launcher until the user quits.
pub fn run(config: LauncherConfig) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, config);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, config: LauncherConfig) -> Result<()> {
    let clock_interval = config.clock_interval();
    let field_interval = config.field.tick_interval();

    let viewport = viewport_for(terminal.size()?, config.cell_size).unwrap_or(Viewport::FALLBACK);

    let mut app = App::new(config, viewport, Box::new(SystemSpawner));
    app.refresh_clock(Utc::now());
    info!(
        width = viewport.width(),
        height = viewport.height(),
        points = app.field().len(),
        "launcher started"
    );

    let start = Instant::now();
    let mut field_ticker = Ticker::new(field_interval, start);
    let mut clock_ticker = Ticker::new(clock_interval, start);

    while app.is_running() {
        if let Some(viewport) = app.viewport_for(terminal.size()?) {
            app.set_viewport(viewport);
        }

        terminal.draw(|f| app.draw(f))?;

        let deadline = field_ticker.next_deadline().min(clock_ticker.next_deadline());
        let timeout = deadline.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        let now = Instant::now();
        if field_ticker.due(now) {
            app.tick_field();
        }
        if clock_ticker.due(now) {
            app.refresh_clock(Utc::now());
        }
    }

    info!("launcher exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::cell::RefCell;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<PathBuf>>>,
        fail: Option<io::ErrorKind>,
    }

    impl Spawner for Recorder {
        fn spawn(&mut self, path: &Path) -> io::Result<u32> {
            self.calls.borrow_mut().push(path.to_path_buf());
            match self.fail {
                Some(kind) => Err(io::Error::new(kind, "permission denied")),
                None => Ok(1),
            }
        }
    }

    fn app_with(recorder: Recorder) -> App {
        let mut config = LauncherConfig::default();
        config.field.seed = Some(11);
        config.user = "tester".to_string();
        App::new(config, Viewport::new(800, 600).unwrap(), Box::new(recorder))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_path(app: &mut App, path: &str) {
        // menu -> content, Play -> Path
        press(app, KeyCode::Tab);
        press(app, KeyCode::Tab);
        for c in path.chars() {
            press(app, KeyCode::Char(c));
        }
        // Path -> Browse -> Play
        press(app, KeyCode::Tab);
        press(app, KeyCode::Tab);
    }

    #[test]
    fn menu_navigation_shows_panels() {
        let mut app = app_with(Recorder::default());
        assert_eq!(app.navigator().current(), PanelId::Games);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().current(), PanelId::Updates);
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.navigator().current(), PanelId::Source);
    }

    #[test]
    fn q_quits_only_from_the_menu() {
        let mut app = app_with(Recorder::default());
        type_path(&mut app, "q");
        assert!(app.is_running());
        assert_eq!(app.game_path(), Some("q"));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_running());
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = app_with(Recorder::default());
        press(&mut app, KeyCode::Tab);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.is_running());
    }

    #[test]
    fn play_spawns_executables() {
        let recorder = Recorder::default();
        let mut app = app_with(recorder.clone());
        type_path(&mut app, r"C:\Games\game.exe");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            *recorder.calls.borrow(),
            vec![PathBuf::from(r"C:\Games\game.exe")]
        );
        assert!(app.dialog().is_none());
    }

    #[test]
    fn play_rejects_non_executables_with_a_dialog() {
        let recorder = Recorder::default();
        let mut app = app_with(recorder.clone());
        type_path(&mut app, r"C:\Games\readme.txt");
        press(&mut app, KeyCode::Enter);
        assert!(recorder.calls.borrow().is_empty());
        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.title, "Error");
        assert_eq!(
            dialog.message,
            "Please select a valid game executable (.exe) file"
        );
    }

    #[test]
    fn spawn_failure_opens_dialog_and_app_keeps_running() {
        let recorder = Recorder {
            fail: Some(io::ErrorKind::PermissionDenied),
            ..Recorder::default()
        };
        let mut app = app_with(recorder);
        type_path(&mut app, r"C:\Games\game.exe");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.dialog().unwrap().message,
            "Failed to launch game: permission denied"
        );
        assert!(app.is_running());
    }

    #[test]
    fn dialog_swallows_keys_until_dismissed() {
        let mut app = app_with(Recorder::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog().is_some());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.game_path(), Some(""));
        assert!(app.dialog().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.dialog().is_none());
        assert_eq!(app.focus(), Focus::Content);
    }

    #[test]
    fn browse_picks_a_path_into_the_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = std::fs::canonicalize(tmp.path()).unwrap();
        let game = dir.join("game.exe");
        std::fs::File::create(&game).unwrap();

        let mut app = app_with(Recorder::default());
        type_path(&mut app, &dir.join("placeholder.exe").to_string_lossy());
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        let browser = app.browser().unwrap();
        assert_eq!(browser.dir, dir);

        // ".." then "game.exe"; the cursor starts on the file
        press(&mut app, KeyCode::Enter);
        assert!(app.browser().is_none());
        let expected = game.to_string_lossy().into_owned();
        assert_eq!(app.game_path(), Some(expected.as_str()));
    }

    #[test]
    fn cancelled_browse_keeps_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let typed = tmp.path().join("mine.exe").to_string_lossy().into_owned();
        let mut app = app_with(Recorder::default());
        type_path(&mut app, &typed);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert!(app.browser().is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.browser().is_none());
        assert_eq!(app.game_path(), Some(typed.as_str()));
    }

    #[test]
    fn clock_uses_utc_format() {
        let mut app = app_with(Recorder::default());
        app.refresh_clock(Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap());
        assert_eq!(app.clock(), "2025-03-04 05:06:07");
    }

    #[test]
    fn viewport_scales_with_cell_size() {
        let app = app_with(Recorder::default());
        assert_eq!(
            app.viewport_for(Size::new(150, 50)),
            Viewport::new(1200, 800)
        );
        assert_eq!(app.viewport_for(Size::new(0, 50)), None);
        assert_eq!(
            viewport_for(Size::new(u16::MAX, 2), (u32::MAX, 1)),
            Viewport::new(u32::MAX, 2)
        );
    }

    #[test]
    fn ticking_keeps_points_inside_a_shrunken_viewport() {
        let mut app = app_with(Recorder::default());
        app.set_viewport(Viewport::new(200, 100).unwrap());
        for _ in 0..5 {
            app.tick_field();
        }
        for p in app.field().points() {
            assert!((0.0..=200.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_shell_and_games_panel() {
        let mut app = app_with(Recorder::default());
        app.refresh_clock(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());
        let screen = render(&app);
        assert!(screen.contains("Schedule I Launcher"));
        assert!(screen.contains("PLAY GAME"));
        assert!(screen.contains("Select game path..."));
        assert!(screen.contains("Current User's Login: tester"));
        assert!(screen.contains("2025-01-02 03:04:05"));
    }

    #[test]
    fn renders_static_panels() {
        let mut app = app_with(Recorder::default());
        app.show(PanelId::Updates);
        assert!(render(&app).contains("Current Version: 1.0.0"));
        app.show(PanelId::Creator);
        assert!(render(&app).contains("Created by SkibidiKronic"));
        app.show(PanelId::Support);
        assert!(render(&app).contains("Frequently Asked Questions"));
        app.show(PanelId::Settings);
        assert!(render(&app).contains("Always on Top"));
    }

    #[test]
    fn renders_error_dialog_on_top() {
        let mut app = app_with(Recorder::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Please select a valid game"));
        assert!(screen.contains("[ OK ]"));
    }
}
