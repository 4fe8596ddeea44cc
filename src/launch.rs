//! src/launch.rs
//!
//! Launching the chosen game: an extension check, then a fire-and-forget spawn.
//!
//! The spawned process is not waited on, monitored, or wired to our terminal;
//! its stdio goes to the null device so it cannot scribble over the UI.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LaunchError {
    /// The path does not end with the executable extension. Nothing was spawned.
    #[error("Please select a valid game executable (.{extension}) file")]
    NotExecutable { extension: String },

    #[error("Failed to launch game: {0}")]
    Spawn(#[from] io::Error),
}

/// Starts a process and returns its pid without waiting for it.
pub trait Spawner {
    fn spawn(&mut self, path: &Path) -> io::Result<u32>;
}

/// Spawns real OS processes.
#[derive(Debug, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&mut self, path: &Path) -> io::Result<u32> {
        let child = Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(child.id())
    }
}

/// Case-sensitive check that `path` ends with `.{extension}`.
pub fn is_executable_path(path: &str, extension: &str) -> bool {
    path.strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Validate `path` and hand it to `spawner`.
pub fn launch(path: &str, extension: &str, spawner: &mut dyn Spawner) -> Result<u32, LaunchError> {
    if !is_executable_path(path, extension) {
        warn!(path, "rejected launch of non-executable path");
        return Err(LaunchError::NotExecutable {
            extension: extension.to_string(),
        });
    }

    match spawner.spawn(Path::new(path)) {
        Ok(pid) => {
            info!(path, pid, "game launched");
            Ok(pid)
        }
        Err(e) => {
            warn!(path, error = %e, "game failed to launch");
            Err(LaunchError::Spawn(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Records spawn requests and answers with a canned result.
    struct Recorder {
        calls: Vec<PathBuf>,
        fail: Option<io::ErrorKind>,
    }

    impl Spawner for Recorder {
        fn spawn(&mut self, path: &Path) -> io::Result<u32> {
            self.calls.push(path.to_path_buf());
            match self.fail {
                Some(kind) => Err(io::Error::new(kind, "Access is denied")),
                None => Ok(4242),
            }
        }
    }

    fn recorder(fail: Option<io::ErrorKind>) -> Recorder {
        Recorder {
            calls: Vec::new(),
            fail,
        }
    }

    #[test]
    fn extension_check() {
        assert!(is_executable_path(r"C:\Games\game.exe", "exe"));
        assert!(is_executable_path("/opt/game.exe", "exe"));
        assert!(!is_executable_path(r"C:\Games\readme.txt", "exe"));
        assert!(!is_executable_path("notexe", "exe"));
        assert!(!is_executable_path("game.EXE", "exe"));
        assert!(!is_executable_path("", "exe"));
    }

    #[test]
    fn spawns_executables() {
        let mut spawner = recorder(None);
        let pid = launch(r"C:\Games\game.exe", "exe", &mut spawner).unwrap();
        assert_eq!(pid, 4242);
        assert_eq!(spawner.calls, vec![PathBuf::from(r"C:\Games\game.exe")]);
    }

    #[test]
    fn rejects_other_files_without_spawning() {
        let mut spawner = recorder(None);
        let err = launch(r"C:\Games\readme.txt", "exe", &mut spawner).unwrap_err();
        assert!(matches!(err, LaunchError::NotExecutable { .. }));
        assert_eq!(
            err.to_string(),
            "Please select a valid game executable (.exe) file"
        );
        assert!(spawner.calls.is_empty());
    }

    #[test]
    fn spawn_failure_carries_the_os_message() {
        let mut spawner = recorder(Some(io::ErrorKind::PermissionDenied));
        let err = launch(r"C:\Games\game.exe", "exe", &mut spawner).unwrap_err();
        assert_eq!(err.to_string(), "Failed to launch game: Access is denied");
    }

    #[test]
    fn missing_binary_fails_to_spawn() {
        let mut spawner = SystemSpawner;
        let err = launch("/no/such/dir/game.exe", "exe", &mut spawner).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn(_)));
        assert!(err.to_string().starts_with("Failed to launch game: "));
    }
}
