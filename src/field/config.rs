//! src/field/config.rs
//!
//! Tunables for the particle field: population, speed, link distance and tick rate.

use std::time::Duration;

use serde::Deserialize;

/// Largest accepted `max_speed`, in virtual pixels per tick.
pub const MAX_SPEED_LIMIT: f64 = 1.0e6;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of points, fixed for the lifetime of a field.
    pub point_count: usize,

    /// Velocity components are drawn uniformly from `[-max_speed, max_speed]`.
    pub max_speed: f64,

    /// Points strictly closer than this are linked by an edge.
    pub threshold: f64,

    /// Intensity of an edge between two coincident points.
    pub max_intensity: u8,

    /// Wall-clock interval between two ticks, in milliseconds.
    pub tick_ms: u64,

    /// Seed for the initial layout. `None` picks a random one.
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// Create a new `FieldConfig` with the default speed and tick rate.
    pub fn new(point_count: usize, threshold: f64, max_intensity: u8) -> Self {
        Self {
            point_count,
            threshold,
            max_intensity,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `max_speed` made usable as a sampling bound: non-finite values become
    /// zero and the magnitude is capped at [`MAX_SPEED_LIMIT`].
    pub fn speed(&self) -> f64 {
        if self.max_speed.is_finite() {
            self.max_speed.abs().min(MAX_SPEED_LIMIT)
        } else {
            0.0
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: 50,
            max_speed: 0.5,
            threshold: 150.0,
            max_intensity: 40,
            tick_ms: 50,
            seed: None,
        }
    }
}
