use approx::assert_relative_eq;
use crate::models::{Axis3D, BoxId, BoxSnapshot, BoxState, Orientation3D, TickMode};

fn snapshot(orientation: Orientation3D) -> BoxSnapshot {
    let state = BoxState::new(
        Axis3D::new(10.0, 20.0, 30.0),
        orientation,
        4.0,
        6.0,
        8.0,
        TickMode::Full,
        1,
        100.0,
    );
    BoxSnapshot::from_state(BoxId(3), &state)
}

#[test]
fn test_snapshot_copies_render_state() {
    let snap = snapshot(Orientation3D::new(1.0, 2.0, 3.0));
    assert_eq!(snap.id.index(), 3);
    assert_eq!(snap.position, Axis3D::new(10.0, 20.0, 30.0));
    assert_eq!(snap.orientation, Orientation3D::new(1.0, 2.0, 3.0));
    assert_eq!((snap.width, snap.height, snap.depth), (4.0, 6.0, 8.0));
}

#[test]
fn test_anchor_centres_only_x_and_z() {
    let snap = snapshot(Orientation3D::zero());
    assert_eq!(snap.anchor(), Axis3D::new(12.0, 20.0, 34.0));
    assert_eq!(snap.centroid(), Axis3D::new(12.0, 23.0, 34.0));
}

#[test]
fn test_unrotated_wireframe_matches_aabb() {
    let snap = snapshot(Orientation3D::zero());
    let edges = snap.wireframe_edges();

    for (from, to) in edges.iter() {
        for point in [from, to] {
            assert!(point.x == 10.0 || point.x == 14.0);
            assert!(point.y == 20.0 || point.y == 26.0);
            assert!(point.z == 30.0 || point.z == 38.0);
        }
        // Every edge runs along exactly one axis.
        let changed = [from.x != to.x, from.y != to.y, from.z != to.z]
            .iter()
            .filter(|changed| **changed)
            .count();
        assert_eq!(changed, 1);
    }
}

#[test]
fn test_rotation_preserves_edge_lengths() {
    let flat = snapshot(Orientation3D::zero()).wireframe_edges();
    let tilted = snapshot(Orientation3D::new(30.0, 45.0, 60.0)).wireframe_edges();

    let length = |(a, b): &(Axis3D, Axis3D)| {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2) + (a.z - b.z).powi(2)).sqrt()
    };
    for (original, rotated) in flat.iter().zip(tilted.iter()) {
        assert_relative_eq!(length(original), length(rotated), epsilon = 1e-9);
    }
}

#[test]
fn test_quarter_turn_about_y_swaps_x_and_z_extents() {
    let snap = snapshot(Orientation3D::new(0.0, 90.0, 0.0));
    let centroid = snap.centroid();
    let edges = snap.wireframe_edges();

    let max_dx = edges.iter().map(|(a, _)| (a.x - centroid.x).abs()).fold(0.0, f64::max);
    let max_dz = edges.iter().map(|(a, _)| (a.z - centroid.z).abs()).fold(0.0, f64::max);
    assert_relative_eq!(max_dx, 4.0, epsilon = 1e-9);
    assert_relative_eq!(max_dz, 2.0, epsilon = 1e-9);
}
