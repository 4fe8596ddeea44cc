//! src/field/simulator.rs
//!
//! The particle field: owns the points, advances them one tick at a time and
//! keeps the latest frame (positions + edges) around for the renderer.
//!
//! The field never fails and never grows or shrinks. The only input to a tick
//! is the current viewport, which may change between ticks when the terminal
//! is resized.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::FieldConfig;
use super::edge::{ProximityEdge, proximity_edges};
use super::point::{Point, Viewport};

/// Everything the renderer needs for one tick.
#[derive(Clone, Debug, Default)]
pub struct FieldFrame {
    /// `(id, x, y)` for every point, in id order.
    pub points: Vec<(usize, f64, f64)>,

    /// Every edge of the current tick; the previous tick's edges are gone.
    pub edges: Vec<ProximityEdge>,
}

pub struct ParticleField {
    config: FieldConfig,
    points: Vec<Point>,
    frame: FieldFrame,
    seed: Option<u64>,
}

impl ParticleField {
    /// Scatter `config.point_count` points over `viewport`.
    ///
    /// Positions are whole numbers in `[0, width] × [0, height]`, velocity
    /// components are uniform in `[-max_speed, max_speed]`. The same seed
    /// always yields the same field.
    pub fn new(config: FieldConfig, viewport: Viewport) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let speed = config.speed();

        let points = (0..config.point_count)
            .map(|id| {
                let x = rng.random_range(0..=viewport.width());
                let y = rng.random_range(0..=viewport.height());
                let vx = rng.random_range(-speed..=speed);
                let vy = rng.random_range(-speed..=speed);
                Point::new(id, f64::from(x), f64::from(y), vx, vy)
            })
            .collect();

        debug!(
            seed,
            count = config.point_count,
            width = viewport.width(),
            height = viewport.height(),
            "particle field seeded"
        );

        let mut field = Self::from_points(config, points);
        field.seed = Some(seed);
        field
    }

    /// Build a field from explicit points. Ids are reassigned to indices.
    pub fn from_points(config: FieldConfig, mut points: Vec<Point>) -> Self {
        for (id, p) in points.iter_mut().enumerate() {
            p.id = id;
        }
        let mut field = Self {
            config,
            points,
            frame: FieldFrame::default(),
            seed: None,
        };
        field.rebuild_frame();
        field
    }

    /// Advance every point one step, then recompute the proximity graph.
    pub fn tick(&mut self, viewport: Viewport) -> &FieldFrame {
        for p in &mut self.points {
            p.advance(viewport);
        }
        self.rebuild_frame();
        &self.frame
    }

    fn rebuild_frame(&mut self) {
        self.frame.points.clear();
        self.frame
            .points
            .extend(self.points.iter().map(|p| (p.id, p.x, p.y)));
        proximity_edges(
            &self.points,
            self.config.threshold,
            self.config.max_intensity,
            &mut self.frame.edges,
        );
    }

    pub fn frame(&self) -> &FieldFrame {
        &self.frame
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Seed the field was scattered with; `None` for [`ParticleField::from_points`].
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
