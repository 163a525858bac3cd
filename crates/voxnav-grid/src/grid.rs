use voxnav_core::{Aabb, IVec3, NavConfig, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::node::{GridNode, NodeId};

/// Uniform 3D grid of nodes voxelizing the merged obstacle bounds.
///
/// Built in two passes (create + validate, then link) and never mutated
/// afterwards; a rebuild always produces a fresh grid. Nodes live in a single
/// flat array addressed by `(x * dim_y + y) * dim_z + z`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoxelGrid {
    dims: IVec3,
    cell_distance: f32,
    bounds: Aabb,
    volume_offset: Vec3,
    nodes: Vec<GridNode>,
}

impl VoxelGrid {
    /// Voxelize the merged bounds of `obstacles` with the configured spacing.
    ///
    /// An empty obstacle set degenerates to a single all-valid node at the
    /// origin. Panics if `config.cell_distance` is not positive; validate the
    /// config first where that must be a recoverable error.
    pub fn build(obstacles: &[Aabb], config: &NavConfig) -> Self {
        assert!(config.cell_distance > 0.0, "cell_distance must be > 0");

        let bounds = Aabb::union_all(obstacles.iter().copied()).unwrap_or(Aabb::ZERO);
        let cell_distance = config.cell_distance;
        let dims = point_counts(bounds.size(), cell_distance);
        // Translation that centers the grid over the world bounds: node (0,0,0)
        // lands on the bounds' min corner.
        let volume_offset = bounds.extents() - bounds.center();

        let node_count = (dims.x * dims.y * dims.z) as usize;
        let mut nodes = Vec::with_capacity(node_count);

        // Pass 1: create nodes and mark validity against every obstacle.
        for_each_coord(dims, |coord| {
            let world_position = coord.as_vec3() * cell_distance - volume_offset;
            let valid = !obstacles.iter().any(|o| o.contains(world_position));
            nodes.push(GridNode {
                coord,
                world_position,
                valid,
                neighbors: Vec::new(),
            });
        });

        let mut grid = Self {
            dims,
            cell_distance,
            bounds,
            volume_offset,
            nodes,
        };

        // Pass 2: link axis-adjacent neighbors, skipping links across the
        // grid boundary. Symmetric by construction.
        for idx in 0..grid.nodes.len() {
            let coord = grid.nodes[idx].coord;
            let mut neighbors = Vec::new();
            for offset in AXIS_OFFSETS {
                if let Some(id) = grid.id_at(coord + offset) {
                    neighbors.push(id);
                }
            }
            grid.nodes[idx].neighbors = neighbors;
        }

        let invalid = grid.nodes.iter().filter(|n| !n.valid).count();
        tracing::debug!(
            dim_x = dims.x,
            dim_y = dims.y,
            dim_z = dims.z,
            nodes = grid.nodes.len(),
            invalid = invalid,
            "Voxel grid built"
        );

        grid
    }

    pub fn dims(&self) -> IVec3 {
        self.dims
    }

    pub fn cell_distance(&self) -> f32 {
        self.cell_distance
    }

    /// Merged world bounds of the obstacle set this grid was built from.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn volume_offset(&self) -> Vec3 {
        self.volume_offset
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order (x-major).
    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &GridNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, coord: IVec3) -> Option<&GridNode> {
        self.index_of(coord).map(|idx| &self.nodes[idx])
    }

    pub fn id_at(&self, coord: IVec3) -> Option<NodeId> {
        self.index_of(coord).map(|idx| NodeId(idx as u32))
    }

    fn index_of(&self, coord: IVec3) -> Option<usize> {
        if coord.x < 0
            || coord.y < 0
            || coord.z < 0
            || coord.x >= self.dims.x
            || coord.y >= self.dims.y
            || coord.z >= self.dims.z
        {
            return None;
        }
        Some(((coord.x * self.dims.y + coord.y) * self.dims.z + coord.z) as usize)
    }
}

/// Neighbor probe order: `-x, +x, -y, +y, -z, +z`.
const AXIS_OFFSETS: [IVec3; 6] = [
    IVec3::new(-1, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, -1),
    IVec3::new(0, 0, 1),
];

/// Nodes per axis: `ceil(size / spacing) + 1`.
fn point_counts(size: Vec3, cell_distance: f32) -> IVec3 {
    IVec3::new(
        (size.x / cell_distance).ceil() as i32 + 1,
        (size.y / cell_distance).ceil() as i32 + 1,
        (size.z / cell_distance).ceil() as i32 + 1,
    )
}

fn for_each_coord(dims: IVec3, mut f: impl FnMut(IVec3)) {
    for x in 0..dims.x {
        for y in 0..dims.y {
            for z in 0..dims.z {
                f(IVec3::new(x, y, z));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_counts_rounds_up_and_adds_one() {
        assert_eq!(
            point_counts(Vec3::new(2.0, 2.5, 0.0), 1.0),
            IVec3::new(3, 4, 1)
        );
        assert_eq!(
            point_counts(Vec3::new(1.0, 1.0, 1.0), 0.5),
            IVec3::new(3, 3, 3)
        );
        assert_eq!(point_counts(Vec3::ZERO, 1.0), IVec3::new(1, 1, 1));
    }
}
