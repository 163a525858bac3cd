use crate::Aabb;

/// A source of obstacle volumes, enumerated once per grid build.
///
/// Implementations append into a caller-owned buffer so rebuild loops can
/// reuse their scratch allocation. The bounds are read fresh on every call;
/// a source backed by moving obstacles reports their current positions.
pub trait ObstacleSource {
    /// Append the current axis-aligned bounds of every obstacle volume.
    fn collect_bounds(&self, out: &mut Vec<Aabb>);
}

impl ObstacleSource for [Aabb] {
    fn collect_bounds(&self, out: &mut Vec<Aabb>) {
        out.extend_from_slice(self);
    }
}

impl ObstacleSource for Vec<Aabb> {
    fn collect_bounds(&self, out: &mut Vec<Aabb>) {
        out.extend_from_slice(self);
    }
}

impl<T: ObstacleSource + ?Sized> ObstacleSource for &T {
    fn collect_bounds(&self, out: &mut Vec<Aabb>) {
        (**self).collect_bounds(out);
    }
}
