use voxnav_core::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered waypoint sequence from start to goal, terminal-inclusive.
///
/// Waypoints are world positions of the grid nodes the search visited;
/// consumers drain them front to back.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaypointPath {
    pub points: Vec<Vec3>,
}

impl WaypointPath {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
