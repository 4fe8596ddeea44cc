//! src/config.rs
//!
//! Launcher configuration loaded from an optional YAML file.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock launcher. Example:
//!
//! ```yaml
//! title: "Schedule I Launcher"
//! game_title: "Schedule I"
//! user: "player"
//! executable_extension: "exe"
//! clock_interval_ms: 1000
//! cell_size: [8, 16]
//! field:
//!   point_count: 50
//!   threshold: 150.0
//!   max_intensity: 40
//!   tick_ms: 50
//!   seed: 42
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, ensure};
use serde::Deserialize;

use crate::field::FieldConfig;
use crate::field::config::MAX_SPEED_LIMIT;

/// Largest accepted `cell_size` component.
pub const MAX_CELL_SIZE: u32 = 1_024;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Shown in the header line.
    pub title: String,

    /// Big title on the Games panel.
    pub game_title: String,

    /// Login shown in the user box.
    pub user: String,

    pub author: String,
    pub version: String,
    pub source_url: String,

    /// Extension (without the dot) a path must end with to be launched.
    pub executable_extension: String,

    /// Where the rolling log file goes.
    pub log_dir: PathBuf,

    /// Refresh interval of the UTC clock, in milliseconds.
    pub clock_interval_ms: u64,

    /// Virtual pixels per terminal cell `(columns, rows)`, used to size the
    /// field's viewport from the terminal area.
    pub cell_size: (u32, u32),

    pub field: FieldConfig,
}

impl LauncherConfig {
    /// Read a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .wrap_err_with(|| format!("failed to open config {}", path.display()))?;
        let config: LauncherConfig = serde_yaml::from_reader(BufReader::new(file))
            .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Reject values the field or the viewport mapping cannot work with.
    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        ensure!(
            field.max_speed.is_finite() && field.max_speed.abs() <= MAX_SPEED_LIMIT,
            "field.max_speed must be a finite number no larger than {MAX_SPEED_LIMIT}, got {}",
            field.max_speed
        );
        ensure!(
            field.threshold.is_finite() && field.threshold >= 0.0,
            "field.threshold must be a finite, non-negative number, got {}",
            field.threshold
        );
        let (cw, ch) = self.cell_size;
        ensure!(
            (1..=MAX_CELL_SIZE).contains(&cw) && (1..=MAX_CELL_SIZE).contains(&ch),
            "cell_size components must be between 1 and {MAX_CELL_SIZE}, got ({cw}, {ch})"
        );
        Ok(())
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms.max(1))
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            title: "Schedule I Launcher".to_string(),
            game_title: "Schedule I".to_string(),
            user: default_user(),
            author: "SkibidiKronic".to_string(),
            version: "1.0.0".to_string(),
            source_url: "https://github.com/SkibidiKronic/Schedule-I".to_string(),
            executable_extension: "exe".to_string(),
            log_dir: PathBuf::from("logs"),
            clock_interval_ms: 1_000,
            cell_size: (8, 16),
            field: FieldConfig::default(),
        }
    }
}

fn default_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "player".to_string())
}
