//! src/lib.rs
//!
//! Terminal game launcher with an animated particle background.

pub mod app;
pub mod browse;
pub mod config;
pub mod field;
pub mod launch;
pub mod logging;
pub mod nav;
pub mod panels;
pub mod schedule;
pub mod ui;

pub use config::LauncherConfig;
pub use field::{FieldConfig, FieldFrame, ParticleField, Point, ProximityEdge, Viewport};
pub use launch::{LaunchError, Spawner, SystemSpawner, launch};
