//! Support sampling for the bottom face of a box.
//!
//! A box is sampled on a grid of `bottom_points` positions spaced
//! `sample_spacing` apart. Point `i` sits at column `i % cols` and row
//! `i / cols`, where `cols` is the number of whole grid columns that fit in
//! the box's width (never fewer than one). A sample is supported when some
//! other box covers it in x/z and that box's supporting face lies within
//! `support_tolerance` of the sampled box's resting face.
use crate::models::BoxState;
use crate::utils::SimulationConstants;

/// Number of grid columns across the bottom face of `state`.
///
/// Boxes narrower than one grid column are sampled along a single column.
///
/// # Example
/// ```
/// use rs_box_physics::support::sample_columns;
///
/// assert_eq!(sample_columns(100.0, 10.0), 10);
/// assert_eq!(sample_columns(25.0, 10.0), 2);
/// assert_eq!(sample_columns(4.0, 10.0), 1);
/// ```
pub fn sample_columns(width: f64, sample_spacing: f64) -> usize {
    let columns = (width / sample_spacing).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

/// World-space (x, z) location of sample `point_index` on the bottom face of `state`.
pub fn sample_point(state: &BoxState, point_index: usize, constants: &SimulationConstants) -> (f64, f64) {
    let columns = sample_columns(state.width, constants.sample_spacing);
    let column = (point_index % columns) as f64;
    let row = (point_index / columns) as f64;
    (
        state.position.x + column * constants.sample_spacing,
        state.position.z + row * constants.sample_spacing,
    )
}

/// Checks whether sample `point_index` of `boxes[index]` rests on any other box.
pub fn is_point_supported(
    boxes: &[BoxState],
    index: usize,
    point_index: usize,
    constants: &SimulationConstants,
) -> bool {
    let state = &boxes[index];
    let downwards = constants.falls_towards_positive_y();
    let resting_face = state.resting_face(downwards);
    let (x, z) = sample_point(state, point_index, constants);

    boxes.iter().enumerate().any(|(other_index, other)| {
        other_index != index
            && other.aabb().covers_xz(x, z)
            && (resting_face - other.supporting_face(downwards)).abs() <= constants.support_tolerance
    })
}

/// Counts the samples of `boxes[index]` that have nothing underneath them.
pub fn count_unsupported_points(boxes: &[BoxState], index: usize, constants: &SimulationConstants) -> usize {
    (0..boxes[index].bottom_points)
        .filter(|&point_index| !is_point_supported(boxes, index, point_index, constants))
        .count()
}

/// Fraction of the bottom samples of `boxes[index]` that are unsupported, in `[0, 1]`.
///
/// A box with no samples is treated as fully supported.
///
/// # Example
/// ```
/// use rs_box_physics::models::{Axis3D, BoxState, Orientation3D, TickMode};
/// use rs_box_physics::support::unsupported_fraction;
/// use rs_box_physics::SimulationConstants;
///
/// let constants = SimulationConstants::default();
/// let floating = BoxState::new(Axis3D::new(0.0, -50.0, 0.0), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 4, 100.0);
/// assert_eq!(unsupported_fraction(&[floating], 0, &constants), 1.0);
/// ```
pub fn unsupported_fraction(boxes: &[BoxState], index: usize, constants: &SimulationConstants) -> f64 {
    let total = boxes[index].bottom_points;
    if total == 0 {
        return 0.0;
    }
    count_unsupported_points(boxes, index, constants) as f64 / total as f64
}
