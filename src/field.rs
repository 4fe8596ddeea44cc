//! src/field.rs
//!
//! Top-level `field` module: the animated particle background.
//!
//! A fixed set of points drifts across a viewport, bouncing off its edges,
//! and every tick the points closer than a threshold are joined by an edge
//! whose intensity fades with distance.

pub mod config;
pub mod edge;
pub mod point;
pub mod simulator;

/// Re-exports
pub use config::FieldConfig;
pub use edge::ProximityEdge;
pub use point::{Point, Viewport};
pub use simulator::{FieldFrame, ParticleField};
