use voxnav_core::Vec3;

use crate::path::WaypointPath;

/// Advances a position along a waypoint path at a fixed speed.
///
/// Each tick spends up to `speed * dt` world units of travel, consuming
/// waypoints that are reached (or already within the arrival distance) and
/// stopping partway toward the next one when the budget runs out.
#[derive(Debug, Clone)]
pub struct PathFollower {
    path: WaypointPath,
    next_index: usize,
    speed: f32,
    arrival_distance: f32,
}

impl PathFollower {
    pub const DEFAULT_ARRIVAL_DISTANCE: f32 = 0.1;

    pub fn new(path: WaypointPath, speed: f32) -> Self {
        Self {
            path,
            next_index: 0,
            speed,
            arrival_distance: Self::DEFAULT_ARRIVAL_DISTANCE,
        }
    }

    pub fn with_arrival_distance(mut self, arrival_distance: f32) -> Self {
        self.arrival_distance = arrival_distance;
        self
    }

    /// Move `position` along the path for one tick and return the new
    /// position.
    pub fn tick(&mut self, position: Vec3, dt_seconds: f32) -> Vec3 {
        let mut remaining = self.speed.max(0.0) * dt_seconds.max(0.0);
        let mut current = position;

        while self.next_index < self.path.points.len() {
            let target = self.path.points[self.next_index];
            let to_target = target - current;
            let dist = to_target.length();

            if dist <= self.arrival_distance {
                self.next_index += 1;
                continue;
            }

            if remaining <= 0.0 {
                break;
            }

            if remaining >= dist {
                current = target;
                self.next_index += 1;
                remaining -= dist;
                continue;
            }

            current = current + to_target * (remaining / dist);
            break;
        }

        current
    }

    /// Whether every waypoint has been consumed.
    pub fn finished(&self) -> bool {
        self.next_index >= self.path.points.len()
    }

    /// Waypoints not yet consumed.
    pub fn remaining_waypoints(&self) -> &[Vec3] {
        &self.path.points[self.next_index.min(self.path.points.len())..]
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }
}
