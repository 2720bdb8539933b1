use crate::models::{Aabb, Axis, Axis3D};

fn aabb(min: (f64, f64, f64), size: (f64, f64, f64)) -> Aabb {
    Aabb::from_corner(Axis3D::new(min.0, min.1, min.2), size.0, size.1, size.2)
}

#[test]
fn test_overlaps_on_is_strict() {
    let a = aabb((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    let touching = aabb((10.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    let crossing = aabb((9.5, 0.0, 0.0), (10.0, 10.0, 10.0));

    assert!(!a.overlaps_on(&touching, Axis::X));
    assert!(a.overlaps_on(&crossing, Axis::X));
    assert!(a.overlaps_on(&touching, Axis::Y));
}

#[test]
fn test_penetration_takes_shorter_exit() {
    let a = aabb((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    let b = aabb((5.0, 8.0, -2.0), (10.0, 10.0, 4.0));

    assert_eq!(a.penetration(&b, Axis::X), 5.0);
    assert_eq!(a.penetration(&b, Axis::Y), 2.0);
    // b sits inside a on z: leaving through either side costs 2 or 12.
    assert_eq!(a.penetration(&b, Axis::Z), 2.0);
    assert_eq!(a.penetration(&b, Axis::X), b.penetration(&a, Axis::X));
}

#[test]
fn test_penetration_is_not_positive_when_apart() {
    let a = aabb((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    let b = aabb((15.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    assert!(a.penetration(&b, Axis::X) <= 0.0);

    let touching = aabb((10.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    assert_eq!(a.penetration(&touching, Axis::X), 0.0);
}

#[test]
fn test_covers_xz_includes_edges() {
    let platform = aabb((0.0, 0.0, 0.0), (1000.0, 0.0, 1000.0));
    assert!(platform.covers_xz(0.0, 0.0));
    assert!(platform.covers_xz(1000.0, 1000.0));
    assert!(platform.covers_xz(500.0, 250.0));
    assert!(!platform.covers_xz(-0.1, 10.0));
    assert!(!platform.covers_xz(10.0, 1000.1));
}

#[test]
fn test_center_and_corners() {
    let a = aabb((0.0, 10.0, -4.0), (2.0, 4.0, 8.0));
    assert_eq!(a.center(Axis::X), 1.0);
    assert_eq!(a.center(Axis::Y), 12.0);
    assert_eq!(a.center(Axis::Z), 0.0);

    let corners = a.corners();
    assert_eq!(corners[0], a.min);
    assert_eq!(corners[6], a.max);
    assert!(corners[..4].iter().all(|corner| corner.y == 10.0));
    assert!(corners[4..].iter().all(|corner| corner.y == 14.0));
}
