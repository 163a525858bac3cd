use voxnav_core::{Aabb, DeterministicRng, NavConfig, ObstacleSource, Vec3};

use crate::grid::VoxelGrid;
use crate::node::GridNode;
use crate::path::WaypointPath;
use crate::registry::PointRegistry;
use crate::search::{self, PathError, PathQuery};

/// One complete, immutable navigation snapshot: a voxel grid, its point
/// registry, and the config they were built with.
///
/// Constructed explicitly from an obstacle source; rebuilds replace the whole
/// volume as a unit, so a borrowed volume can never observe a half-built
/// grid.
#[derive(Debug, Clone)]
pub struct NavVolume {
    config: NavConfig,
    grid: VoxelGrid,
    registry: PointRegistry,
}

impl NavVolume {
    /// Build a volume from the source's current obstacle set.
    ///
    /// Panics on a non-positive `cell_distance`; use [`NavConfig::validate`]
    /// (or [`crate::GridLifecycle::new`]) where that must be recoverable.
    pub fn build(source: impl ObstacleSource, config: NavConfig) -> Self {
        let mut bounds = Vec::new();
        source.collect_bounds(&mut bounds);
        Self::from_obstacles(&bounds, config)
    }

    pub(crate) fn from_obstacles(obstacles: &[Aabb], config: NavConfig) -> Self {
        let grid = VoxelGrid::build(obstacles, &config);
        let registry = PointRegistry::for_grid(&grid);
        Self {
            config,
            grid,
            registry,
        }
    }

    pub fn config(&self) -> NavConfig {
        self.config
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn registry(&self) -> &PointRegistry {
        &self.registry
    }

    /// Merged world bounds the grid was voxelized from.
    pub fn bounds(&self) -> Aabb {
        self.grid.bounds()
    }

    /// Snap a world position to the nearest valid node within the configured
    /// snap radius.
    pub fn closest_point(&self, position: Vec3) -> Option<&GridNode> {
        self.registry
            .closest(position, self.config.snap_radius())
            .map(|id| self.grid.node(id))
    }

    /// All nodes within `radius` of `position`. Lazy, finite, restartable;
    /// recomputed on every call.
    pub fn nearby_points(
        &self,
        position: Vec3,
        radius: f32,
        include_invalid: bool,
    ) -> impl Iterator<Item = &GridNode> {
        self.registry
            .nearby(position, radius, include_invalid)
            .map(move |entry| self.grid.node(entry.node))
    }

    /// Find a walkable path between two world positions.
    ///
    /// Both endpoints snap to their nearest valid node; a failed snap returns
    /// [`PathError`]. When the goal is unreachable the result is still `Ok`:
    /// a best-effort path ending at the last expanded node, not necessarily
    /// the goal — callers that need goal arrival must compare the final
    /// waypoint themselves.
    pub fn path_to(&self, from: Vec3, to: Vec3) -> Result<WaypointPath, PathError> {
        let mut query = PathQuery::default();
        let mut out = WaypointPath::default();
        self.path_to_into(from, to, &mut query, &mut out)?;
        Ok(out)
    }

    /// [`Self::path_to`] with caller-owned scratch and output buffers, for
    /// query loops that should not reallocate.
    pub fn path_to_into(
        &self,
        from: Vec3,
        to: Vec3,
        query: &mut PathQuery,
        out: &mut WaypointPath,
    ) -> Result<(), PathError> {
        search::find_path(
            &self.grid,
            &self.registry,
            self.config.snap_radius(),
            from,
            to,
            query,
            out,
        )
    }

    /// Uniform random position inside the grid's world bounds.
    pub fn random_position(&self, rng: &mut impl DeterministicRng) -> Vec3 {
        self.grid.bounds().random_point(rng)
    }
}
