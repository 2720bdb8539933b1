use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::interactions::overlaps;
use crate::models::{Axis3D, BoxState, Orientation3D, TickMode};

fn make_box(position: (f64, f64, f64), size: (f64, f64, f64)) -> BoxState {
    BoxState::new(
        Axis3D::new(position.0, position.1, position.2),
        Orientation3D::zero(),
        size.0,
        size.1,
        size.2,
        TickMode::Full,
        1,
        100.0,
    )
}

#[test]
fn test_overlapping_boxes() {
    let a = make_box((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    let b = make_box((5.0, 5.0, 5.0), (10.0, 10.0, 10.0));
    assert!(overlaps(&a, &b));

    let inside = make_box((2.0, 2.0, 2.0), (1.0, 1.0, 1.0));
    assert!(overlaps(&a, &inside));
}

#[test]
fn test_separated_on_any_single_axis() {
    let a = make_box((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    assert!(!overlaps(&a, &make_box((20.0, 0.0, 0.0), (10.0, 10.0, 10.0))));
    assert!(!overlaps(&a, &make_box((0.0, -20.0, 0.0), (10.0, 10.0, 10.0))));
    assert!(!overlaps(&a, &make_box((0.0, 0.0, 10.5), (10.0, 10.0, 10.0))));
}

#[test]
fn test_touching_faces_do_not_overlap() {
    let a = make_box((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
    assert!(!overlaps(&a, &make_box((10.0, 0.0, 0.0), (10.0, 10.0, 10.0))));
    assert!(!overlaps(&a, &make_box((0.0, 10.0, 0.0), (10.0, 10.0, 10.0))));
    assert!(!overlaps(&a, &make_box((0.0, 0.0, -10.0), (10.0, 10.0, 10.0))));
    assert!(!overlaps(&a, &make_box((10.0, 10.0, 10.0), (10.0, 10.0, 10.0))));
}

#[test]
fn test_flat_platform_overlaps_box_crossing_its_plane() {
    let platform = make_box((0.0, 0.0, 0.0), (1000.0, 0.0, 1000.0));
    let crossing = make_box((10.0, -3.0, 10.0), (10.0, 10.0, 10.0));
    let resting = make_box((10.0, -10.0, 10.0), (10.0, 10.0, 10.0));

    assert!(overlaps(&crossing, &platform));
    assert!(!overlaps(&resting, &platform));
}

#[test]
fn test_overlap_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let mut random_box = || {
            make_box(
                (rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0)),
                (rng.random_range(0.5..15.0), rng.random_range(0.0..15.0), rng.random_range(0.5..15.0)),
            )
        };
        let a = random_box();
        let b = random_box();
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a), "a: {:?}\nb: {:?}", a, b);
    }
}
