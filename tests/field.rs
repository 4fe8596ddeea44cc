use std::collections::HashSet;

use tui_launcher::field::edge::intensity;
use tui_launcher::{FieldConfig, ParticleField, Point, Viewport};

fn viewport(w: u32, h: u32) -> Viewport {
    Viewport::new(w, h).unwrap()
}

/// Fast points so that bounces happen often.
fn busy_config(seed: u64) -> FieldConfig {
    let mut config = FieldConfig::default().with_seed(seed);
    config.max_speed = 25.0;
    config
}

#[test]
fn points_stay_inside_the_viewport() {
    for seed in 0..20 {
        let vp = viewport(300, 200);
        let mut field = ParticleField::new(busy_config(seed), vp);
        for _ in 0..500 {
            let frame = field.tick(vp);
            for &(id, x, y) in &frame.points {
                assert!((0.0..=300.0).contains(&x), "seed {seed} point {id} x={x}");
                assert!((0.0..=200.0).contains(&y), "seed {seed} point {id} y={y}");
            }
        }
    }
}

#[test]
fn bounce_flips_velocity_and_freezes_the_axis() {
    let vp = viewport(300, 200);
    let mut field = ParticleField::new(busy_config(4), vp);
    let mut bounces = 0;
    for _ in 0..200 {
        let before = field.points().to_vec();
        field.tick(vp);
        for (old, new) in before.iter().zip(field.points()) {
            let cx = old.x + old.vx;
            if !(0.0..=300.0).contains(&cx) {
                bounces += 1;
                assert_eq!(new.x, old.x);
                assert_eq!(new.vx, -old.vx);
            } else {
                assert_eq!(new.x, cx);
                assert_eq!(new.vx, old.vx);
            }
            let cy = old.y + old.vy;
            if !(0.0..=200.0).contains(&cy) {
                assert_eq!(new.y, old.y);
                assert_eq!(new.vy, -old.vy);
            } else {
                assert_eq!(new.y, cy);
            }
        }
    }
    assert!(bounces > 0);
}

#[test]
fn same_seed_same_animation() {
    let vp = viewport(1000, 700);
    let mut a = ParticleField::new(FieldConfig::default().with_seed(77), vp);
    let mut b = ParticleField::new(FieldConfig::default().with_seed(77), vp);
    for _ in 0..50 {
        a.tick(vp);
        b.tick(vp);
    }
    assert_eq!(a.points(), b.points());
    assert_eq!(a.frame().edges, b.frame().edges);

    let c = ParticleField::new(FieldConfig::default().with_seed(78), vp);
    assert_ne!(
        ParticleField::new(FieldConfig::default().with_seed(77), vp).points(),
        c.points()
    );
}

#[test]
fn edges_are_symmetric_without_duplicates() {
    let vp = viewport(400, 300);
    let mut field = ParticleField::new(FieldConfig::default().with_seed(5), vp);
    for _ in 0..20 {
        let frame = field.tick(vp);
        let mut seen = HashSet::new();
        for edge in &frame.edges {
            assert!(edge.a < edge.b);
            assert!(seen.insert((edge.a, edge.b)), "duplicate edge {edge:?}");
            assert!(!seen.contains(&(edge.b, edge.a)));
            assert!(edge.distance < 150.0);
        }
    }
}

#[test]
fn every_close_pair_gets_an_edge() {
    let vp = viewport(1000, 700);
    let field = ParticleField::new(FieldConfig::default().with_seed(21), vp);
    let points = field.points();
    let mut expected = 0;
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            if points[i].distance_to(&points[j]) < 150.0 {
                expected += 1;
            }
        }
    }
    assert_eq!(field.frame().edges.len(), expected);
}

#[test]
fn two_points_100_apart() {
    let config = FieldConfig::new(2, 150.0, 40);
    let mut field = ParticleField::from_points(
        config,
        vec![
            Point::new(0, 100.0, 100.0, 0.0, 0.0),
            Point::new(1, 200.0, 100.0, 0.0, 0.0),
        ],
    );
    let frame = field.tick(viewport(1000, 700));
    assert_eq!(frame.edges.len(), 1);
    assert_eq!(frame.edges[0].intensity, 13);
    assert_eq!(intensity(150.0, 150.0, 40), 0);
}

#[test]
fn edges_from_the_previous_tick_are_dropped() {
    let config = FieldConfig::new(2, 150.0, 40);
    let mut field = ParticleField::from_points(
        config,
        vec![
            Point::new(0, 100.0, 100.0, -10.0, 0.0),
            Point::new(1, 240.0, 100.0, 10.0, 0.0),
        ],
    );
    assert_eq!(field.frame().edges.len(), 1);
    let frame = field.tick(viewport(1000, 700));
    assert!(frame.edges.is_empty());
}
