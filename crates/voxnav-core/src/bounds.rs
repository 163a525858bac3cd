use crate::rng::DeterministicRng;
use crate::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as min/max corners.
///
/// A zero-size box is valid and contains exactly its own corner point;
/// containment is inclusive on all faces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Degenerate point box at the origin.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Box spanning the two corners, normalized component-wise.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half of `size`.
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Inclusive containment test against all six faces.
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Smallest box enclosing every box in the iterator, or `None` when empty.
    pub fn union_all<I>(boxes: I) -> Option<Aabb>
    where
        I: IntoIterator<Item = Aabb>,
    {
        boxes
            .into_iter()
            .fold(None, |acc: Option<Aabb>, b| match acc {
                Some(merged) => Some(merged.union(&b)),
                None => Some(b),
            })
    }

    /// Uniform random point inside the box.
    pub fn random_point(&self, rng: &mut impl DeterministicRng) -> Vec3 {
        Vec3::new(
            rng.next_f32_range(self.min.x, self.max.x),
            rng.next_f32_range(self.min.y, self.max.y),
            rng.next_f32_range(self.min.z, self.max.z),
        )
    }
}
