use voxnav_core::Vec3;

use crate::grid::VoxelGrid;
use crate::node::NodeId;

/// One registry entry: a node id plus the position/validity needed to answer
/// proximity queries without touching the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEntry {
    pub node: NodeId,
    pub position: Vec3,
    pub valid: bool,
}

/// Flat index of every node of one grid build, in node-creation order.
///
/// Scoped to the grid it was built from; a rebuild produces a fresh registry
/// alongside the fresh grid. Queries are recomputed per call, never cached.
#[derive(Debug, Clone, Default)]
pub struct PointRegistry {
    entries: Vec<PointEntry>,
}

impl PointRegistry {
    pub fn for_grid(grid: &VoxelGrid) -> Self {
        let entries = grid
            .nodes()
            .iter()
            .enumerate()
            .map(|(idx, node)| PointEntry {
                node: NodeId(idx as u32),
                position: node.world_position(),
                valid: node.is_valid(),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointEntry> {
        self.entries.iter()
    }

    /// All entries within `radius` (Euclidean, inclusive) of `position`,
    /// optionally including invalid nodes. Lazy and restartable.
    pub fn nearby(
        &self,
        position: Vec3,
        radius: f32,
        include_invalid: bool,
    ) -> impl Iterator<Item = &PointEntry> {
        let radius_sq = radius * radius;
        self.entries.iter().filter(move |entry| {
            (include_invalid || entry.valid)
                && entry.position.distance_squared(position) <= radius_sq
        })
    }

    /// The valid node of minimum squared distance to `position` within
    /// `snap_radius`, or `None` when no candidate is in range.
    ///
    /// Equidistant candidates resolve to the first one in registry iteration
    /// order (node-creation order); the comparison is strictly-less so a
    /// later tie never displaces an earlier winner.
    pub fn closest(&self, position: Vec3, snap_radius: f32) -> Option<NodeId> {
        let mut best: Option<(NodeId, f32)> = None;
        for entry in self.nearby(position, snap_radius, false) {
            let dist_sq = entry.position.distance_squared(position);
            match best {
                Some((_, best_sq)) if dist_sq >= best_sq => {}
                _ => best = Some((entry.node, dist_sq)),
            }
        }
        best.map(|(node, _)| node)
    }
}
