//! Engine-agnostic primitives for voxel navigation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod config;
pub mod math;
pub mod obstacle;
pub mod rng;

pub use bounds::Aabb;
pub use config::{ConfigError, NavConfig};
pub use math::{IVec3, Vec3};
pub use obstacle::ObstacleSource;
pub use rng::{DeterministicRng, SplitMix64};
