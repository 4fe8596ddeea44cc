//! src/field/edge.rs
//!
//! Proximity edges: links between nearby points, rebuilt from scratch every tick.

use super::point::Point;

/// A link between two points closer than the threshold.
///
/// `a < b` always holds, so an unordered pair appears at most once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEdge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    /// Grayscale level used to draw the edge.
    pub intensity: u8,
}

/// `round(max_intensity * (1 - distance / threshold))`, floored at zero.
pub fn intensity(distance: f64, threshold: f64, max_intensity: u8) -> u8 {
    if threshold <= 0.0 || distance >= threshold {
        return 0;
    }
    let max = f64::from(max_intensity);
    (max * (1.0 - distance / threshold)).round().clamp(0.0, max) as u8
}

/// Rebuild `out` with an edge for every unordered pair closer than `threshold`.
///
/// Plain pairwise scan, O(n²) in the number of points. Fine for a few dozen
/// points; larger fields would want a spatial grid.
pub fn proximity_edges(
    points: &[Point],
    threshold: f64,
    max_intensity: u8,
    out: &mut Vec<ProximityEdge>,
) {
    out.clear();
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let distance = p.distance_to(q);
            if distance < threshold {
                let (a, b) = if p.id < q.id { (p.id, q.id) } else { (q.id, p.id) };
                out.push(ProximityEdge {
                    a,
                    b,
                    distance,
                    intensity: intensity(distance, threshold, max_intensity),
                });
            }
        }
    }
}
