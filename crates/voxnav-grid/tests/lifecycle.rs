use std::cell::Cell;

use voxnav_core::{Aabb, ConfigError, NavConfig, ObstacleSource, Vec3};
use voxnav_grid::GridLifecycle;

struct CountingSource {
    boxes: Vec<Aabb>,
    calls: Cell<usize>,
}

impl CountingSource {
    fn new(boxes: Vec<Aabb>) -> Self {
        Self {
            boxes,
            calls: Cell::new(0),
        }
    }
}

impl ObstacleSource for CountingSource {
    fn collect_bounds(&self, out: &mut Vec<Aabb>) {
        self.calls.set(self.calls.get() + 1);
        out.extend_from_slice(&self.boxes);
    }
}

fn unit_box(center: Vec3) -> Aabb {
    Aabb::from_center_size(center, Vec3::splat(1.0))
}

fn config(refresh_interval: f32) -> NavConfig {
    NavConfig {
        refresh_interval,
        ..NavConfig::default()
    }
}

#[test]
fn volume_is_absent_before_the_first_tick() {
    let source = CountingSource::new(vec![unit_box(Vec3::ZERO)]);
    let lifecycle = GridLifecycle::new(source, config(0.0)).expect("valid config");

    assert!(lifecycle.volume().is_none());
    assert_eq!(lifecycle.source().calls.get(), 0);
}

#[test]
fn non_positive_interval_builds_exactly_once() {
    let source = CountingSource::new(vec![unit_box(Vec3::ZERO)]);
    let mut lifecycle = GridLifecycle::new(source, config(0.0)).expect("valid config");

    assert!(lifecycle.tick(0.016), "first tick builds");
    for _ in 0..200 {
        assert!(!lifecycle.tick(0.016));
    }

    assert_eq!(lifecycle.source().calls.get(), 1);
    assert!(lifecycle.volume().is_some());
}

#[test]
fn positive_interval_rebuilds_at_each_accumulated_multiple() {
    let source = CountingSource::new(vec![unit_box(Vec3::ZERO)]);
    let mut lifecycle = GridLifecycle::new(source, config(2.0)).expect("valid config");

    let rebuilds: Vec<bool> = (0..5).map(|_| lifecycle.tick(1.0)).collect();

    // Build at first opportunity, then every two seconds of tick time.
    assert_eq!(rebuilds, vec![true, false, true, false, true]);
    assert_eq!(lifecycle.source().calls.get(), 3);
}

#[test]
fn rebuild_observes_moved_obstacles_and_swaps_wholesale() {
    let source = CountingSource::new(vec![unit_box(Vec3::ZERO)]);
    let mut lifecycle = GridLifecycle::new(source, config(1.0)).expect("valid config");

    lifecycle.tick(1.0);
    let before = lifecycle.volume().expect("built").bounds();

    lifecycle.source_mut().boxes = vec![unit_box(Vec3::new(10.0, 0.0, 0.0))];
    // Not due yet: the old snapshot stays visible untouched.
    assert!(!lifecycle.tick(0.5));
    assert_eq!(lifecycle.volume().expect("built").bounds(), before);

    assert!(lifecycle.tick(0.5));
    let after = lifecycle.volume().expect("rebuilt").bounds();
    assert_ne!(after, before);
    assert_eq!(after.center(), Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn invalid_config_fails_at_construction() {
    let source = CountingSource::new(vec![]);
    let bad = NavConfig {
        cell_distance: 0.0,
        ..NavConfig::default()
    };

    match GridLifecycle::new(source, bad) {
        Err(ConfigError::NonPositiveCellDistance(d)) => assert_eq!(d, 0.0),
        other => panic!("expected a config error, got {:?}", other.map(|_| ())),
    }
}
