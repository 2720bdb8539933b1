use crate::models::{Axis, Axis3D, BoxState, Orientation3D, TickMode};

fn cube(position: (f64, f64, f64), size: f64) -> BoxState {
    BoxState::new(
        Axis3D::new(position.0, position.1, position.2),
        Orientation3D::zero(),
        size,
        size,
        size,
        TickMode::Full,
        100,
        100.0,
    )
}

#[test]
fn test_tick_mode_ordering() {
    assert!(TickMode::None < TickMode::CollisionOnly);
    assert!(TickMode::CollisionOnly < TickMode::Full);
    assert_eq!(TickMode::default(), TickMode::Full);

    assert!(TickMode::Full.integrates());
    assert!(!TickMode::CollisionOnly.integrates());
    assert!(!TickMode::None.integrates());

    assert!(TickMode::Full.collides());
    assert!(TickMode::CollisionOnly.collides());
    assert!(!TickMode::None.collides());
}

#[test]
fn test_new_box_starts_at_rest() {
    let state = BoxState::new(
        Axis3D::new(1.0, 2.0, 3.0),
        Orientation3D::new(10.0, 20.0, 30.0),
        4.0,
        5.0,
        6.0,
        TickMode::CollisionOnly,
        12,
        100.0,
    );
    assert_eq!(state.velocity.magnitude(), 0.0);
    assert_eq!(state.angular_velocity.magnitude(), 0.0);
    assert_eq!(state.orientation.y, 20.0);
    assert_eq!(state.target_orientation, Orientation3D::zero());
    assert_eq!(state.bottom_points, 12);
    assert_eq!(state.energy, 100.0);
    assert_eq!(state.tick_mode, TickMode::CollisionOnly);
}

#[test]
fn test_aabb_uses_minimum_corner() {
    let state = BoxState::new(
        Axis3D::new(1.0, 2.0, 3.0),
        Orientation3D::zero(),
        4.0,
        5.0,
        6.0,
        TickMode::Full,
        1,
        100.0,
    );
    let aabb = state.aabb();
    assert_eq!(aabb.min, Axis3D::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.max, Axis3D::new(5.0, 7.0, 9.0));
    assert_eq!(state.extent(Axis::X), 4.0);
    assert_eq!(state.extent(Axis::Y), 5.0);
    assert_eq!(state.extent(Axis::Z), 6.0);
}

#[test]
fn test_faces_follow_fall_direction() {
    let state = cube((0.0, 20.0, 0.0), 10.0);

    // Falling towards +y the box rests on its max-y face.
    assert_eq!(state.resting_face(true), 30.0);
    assert_eq!(state.supporting_face(true), 20.0);

    // Falling towards -y it rests on its min-y face.
    assert_eq!(state.resting_face(false), 20.0);
    assert_eq!(state.supporting_face(false), 30.0);
}
