//! Voxel grid construction and 6-connected path search over obstacle volumes.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod follow;
pub mod grid;
pub mod lifecycle;
pub mod node;
pub mod path;
pub mod registry;
pub mod search;
pub mod volume;

pub use follow::PathFollower;
pub use grid::VoxelGrid;
pub use lifecycle::GridLifecycle;
pub use node::{GridNode, NodeId};
pub use path::WaypointPath;
pub use registry::{PointEntry, PointRegistry};
pub use search::{PathError, PathQuery};
pub use volume::NavVolume;
