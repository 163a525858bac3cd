use voxnav_core::{IVec3, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier of a node within one grid build.
///
/// Ids index the grid's flat node array; they are stable for the lifetime of
/// that build and meaningless against any other grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One cell of the voxel grid.
///
/// Immutable after the grid's two build passes: position and validity are
/// fixed in pass 1, neighbor links in pass 2. Neighbor ids always refer into
/// the grid that owns this node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridNode {
    pub(crate) coord: IVec3,
    pub(crate) world_position: Vec3,
    pub(crate) valid: bool,
    pub(crate) neighbors: Vec<NodeId>,
}

impl GridNode {
    pub fn coord(&self) -> IVec3 {
        self.coord
    }

    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    /// Whether the node is free of obstacles (traversable).
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Axis-adjacent neighbors in `-x, +x, -y, +y, -z, +z` order, absent
    /// directions skipped. Border nodes have fewer than six.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}
