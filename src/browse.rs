//! src/browse.rs
//!
//! In-terminal file picker: directory listings filtered to executables, and
//! the cursor/navigation state of the picker overlay.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use thiserror::Error;
use tracing::debug;

use crate::launch::is_executable_path;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("cannot read {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Dir,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Contents of one directory as the picker shows them: `..` first when there
/// is a parent, then sub-directories, then matching files, each sorted by name.
/// Hidden entries are skipped.
#[derive(Clone, Debug)]
pub struct Listing {
    pub dir: PathBuf,
    pub entries: Vec<BrowseEntry>,
}

impl Listing {
    pub fn read(dir: &Path, extension: &str) -> Result<Self, BrowseError> {
        let read_err = |source| BrowseError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            // follows symlinks, so a link to a directory is browsable
            if path.is_dir() {
                dirs.push(BrowseEntry {
                    name,
                    path,
                    kind: EntryKind::Dir,
                });
            } else if is_executable_path(&name, extension) {
                files.push(BrowseEntry {
                    name,
                    path,
                    kind: EntryKind::File,
                });
            }
        }
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));

        let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
        if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
            entries.push(BrowseEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            });
        }
        entries.extend(dirs);
        entries.extend(files);

        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
        })
    }
}

/// What a key press did to the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseOutcome {
    Pending,
    Picked(PathBuf),
    Cancelled,
}

pub struct BrowserState {
    pub dir: PathBuf,
    pub listing: Result<Listing, BrowseError>,
    pub selected: usize,
    extension: String,
}

impl BrowserState {
    /// Open the picker in `start`. A relative `start` is resolved against the
    /// working directory so that `..` always names a real directory.
    pub fn open(start: &Path, extension: &str) -> Self {
        let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
        let mut state = Self {
            listing: Listing::read(&start, extension),
            dir: start,
            selected: 0,
            extension: extension.to_string(),
        };
        state.select_first_real_entry();
        state
    }

    /// Directory to start browsing from: the folder of `current` when it
    /// names one that exists, otherwise the working directory. Always absolute
    /// unless the working directory itself is unavailable.
    pub fn start_dir(current: &str) -> PathBuf {
        let from_current = Path::new(current)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .and_then(|p| fs::canonicalize(p).ok())
            .filter(|p| p.is_dir());
        from_current
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn entries(&self) -> &[BrowseEntry] {
        match &self.listing {
            Ok(listing) => &listing.entries,
            Err(_) => &[],
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> BrowseOutcome {
        let len = self.entries().len();
        match key.code {
            KeyCode::Esc => return BrowseOutcome::Cancelled,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down if len > 0 => self.selected = (self.selected + 1).min(len - 1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = len.saturating_sub(1),
            KeyCode::Backspace => {
                if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
                    self.change_dir(parent);
                }
            }
            KeyCode::Enter => {
                if let Some(entry) = self.entries().get(self.selected).cloned() {
                    match entry.kind {
                        EntryKind::File => return BrowseOutcome::Picked(entry.path),
                        EntryKind::Dir | EntryKind::Parent => self.change_dir(entry.path),
                    }
                }
            }
            _ => {}
        }
        BrowseOutcome::Pending
    }

    fn change_dir(&mut self, dir: PathBuf) {
        debug!(dir = %dir.display(), "browsing");
        self.listing = Listing::read(&dir, &self.extension);
        self.dir = dir;
        self.selected = 0;
        self.select_first_real_entry();
    }

    /// Skip the `..` row so Enter does not immediately leave the directory.
    fn select_first_real_entry(&mut self) {
        let entries = self.entries();
        if entries.len() > 1 && entries[0].kind == EntryKind::Parent {
            self.selected = 1;
        }
    }
}
