use crate::models::{Axis, BoxState};

/// Checks whether two boxes interpenetrate.
///
/// Uses strict interval overlap on x, y and z. Boxes that only share a face,
/// edge or corner do not overlap.
///
/// # Example
/// ```
/// use rs_box_physics::interactions::overlaps;
/// use rs_box_physics::models::{Axis3D, BoxState, Orientation3D, TickMode};
///
/// let a = BoxState::new(Axis3D::new(0.0, 0.0, 0.0), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
/// let b = BoxState::new(Axis3D::new(5.0, 0.0, 0.0), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
/// let c = BoxState::new(Axis3D::new(10.0, 0.0, 0.0), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
///
/// assert!(overlaps(&a, &b));
/// assert!(!overlaps(&a, &c));
/// ```
pub fn overlaps(a: &BoxState, b: &BoxState) -> bool {
    let (a, b) = (a.aabb(), b.aabb());
    Axis::ALL.iter().all(|&axis| a.overlaps_on(&b, axis))
}
