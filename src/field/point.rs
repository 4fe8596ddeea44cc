//! src/field/point.rs
//!
//! Points, the viewport they live in, and the per-axis bounce rule.

/// Size of the field's coordinate space. Both dimensions are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Used before the terminal reports a usable size.
    pub const FALLBACK: Viewport = Viewport {
        width: 1000,
        height: 700,
    };

    /// Returns `None` when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// A single drifting point. `id` is its index at creation and never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Point {
    pub fn new(id: usize, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { id, x, y, vx, vy }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move by one step of velocity inside `viewport`.
    ///
    /// Each axis is handled on its own: when the candidate coordinate leaves
    /// `[0, bound]` the velocity component is negated and the point stays put on
    /// that axis for this tick.
    pub fn advance(&mut self, viewport: Viewport) {
        (self.x, self.vx) = step_axis(self.x, self.vx, f64::from(viewport.width));
        (self.y, self.vy) = step_axis(self.y, self.vy, f64::from(viewport.height));
    }
}

/// One axis of [`Point::advance`]. Returns the committed `(position, velocity)`.
fn step_axis(position: f64, velocity: f64, bound: f64) -> (f64, f64) {
    let candidate = position + velocity;
    if candidate < 0.0 || candidate > bound {
        // the old position can only be outside after the viewport shrank
        (position.clamp(0.0, bound), -velocity)
    } else {
        (candidate, velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(w: u32, h: u32) -> Viewport {
        Viewport::new(w, h).unwrap()
    }

    #[test]
    fn zero_sized_viewport_is_rejected() {
        assert!(Viewport::new(0, 10).is_none());
        assert!(Viewport::new(10, 0).is_none());
        assert_eq!(viewport(3, 4).width(), 3);
    }

    #[test]
    fn moves_freely_inside_bounds() {
        let mut p = Point::new(0, 10.0, 20.0, 0.5, -0.25);
        p.advance(viewport(100, 100));
        assert_eq!((p.x, p.y), (10.5, 19.75));
        assert_eq!((p.vx, p.vy), (0.5, -0.25));
    }

    #[test]
    fn bounce_freezes_only_the_bouncing_axis() {
        let mut p = Point::new(0, 99.8, 50.0, 0.4, 0.3);
        p.advance(viewport(100, 100));
        assert_eq!(p.x, 99.8);
        assert_eq!(p.vx, -0.4);
        assert!((p.y - 50.3).abs() < 1e-9);
        assert_eq!(p.vy, 0.3);

        p.advance(viewport(100, 100));
        assert!((p.x - 99.4).abs() < 1e-9);
    }

    #[test]
    fn bounces_off_the_origin_edges() {
        let mut p = Point::new(0, 0.1, 0.2, -0.5, -0.5);
        p.advance(viewport(100, 100));
        assert_eq!((p.x, p.y), (0.1, 0.2));
        assert_eq!((p.vx, p.vy), (0.5, 0.5));
    }

    #[test]
    fn landing_exactly_on_the_bound_is_inside() {
        let mut p = Point::new(0, 99.5, 0.5, 0.5, -0.5);
        p.advance(viewport(100, 100));
        assert_eq!((p.x, p.y), (100.0, 0.0));
        assert_eq!((p.vx, p.vy), (0.5, -0.5));
    }

    #[test]
    fn shrunken_viewport_pulls_point_back_inside() {
        let mut p = Point::new(0, 900.0, 600.0, 0.5, 0.5);
        p.advance(viewport(400, 300));
        assert_eq!((p.x, p.y), (400.0, 300.0));
        assert_eq!((p.vx, p.vy), (-0.5, -0.5));
    }
}
