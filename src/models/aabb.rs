use crate::models::{Axis, Axis3D};

/// Axis-aligned bounding box spanning `min..max` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Axis3D,
    pub max: Axis3D,
}

impl Aabb {
    /// Builds the box whose minimum corner is `corner`.
    pub fn from_corner(corner: Axis3D, width: f64, height: f64, depth: f64) -> Self {
        Aabb {
            min: corner,
            max: Axis3D::new(corner.x + width, corner.y + height, corner.z + depth),
        }
    }

    pub fn center(&self, axis: Axis) -> f64 {
        (self.min.get(axis) + self.max.get(axis)) / 2.0
    }

    /// Strict interval overlap on a single axis. Touching intervals do not overlap.
    pub fn overlaps_on(&self, other: &Aabb, axis: Axis) -> bool {
        self.min.get(axis) < other.max.get(axis) && self.max.get(axis) > other.min.get(axis)
    }

    /// Depth of interpenetration on `axis`: the shorter of the two distances
    /// that would separate the intervals. Zero or negative when they do not overlap.
    pub fn penetration(&self, other: &Aabb, axis: Axis) -> f64 {
        let forward = self.max.get(axis) - other.min.get(axis);
        let backward = other.max.get(axis) - self.min.get(axis);
        forward.min(backward)
    }

    /// Whether the point `(x, z)` lies on the box's horizontal footprint, edges included.
    pub fn covers_xz(&self, x: f64, z: f64) -> bool {
        self.min.x <= x && x <= self.max.x && self.min.z <= z && z <= self.max.z
    }

    /// The eight corners, bottom face first.
    pub fn corners(&self) -> [Axis3D; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Axis3D::new(lo.x, lo.y, lo.z),
            Axis3D::new(hi.x, lo.y, lo.z),
            Axis3D::new(hi.x, lo.y, hi.z),
            Axis3D::new(lo.x, lo.y, hi.z),
            Axis3D::new(lo.x, hi.y, lo.z),
            Axis3D::new(hi.x, hi.y, lo.z),
            Axis3D::new(hi.x, hi.y, hi.z),
            Axis3D::new(lo.x, hi.y, hi.z),
        ]
    }
}
