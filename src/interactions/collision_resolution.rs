// src/interactions/collision_resolution.rs

use log::trace;
use crate::interactions::overlaps;
use crate::models::{Axis, BoxState};
use crate::utils::SimulationConstants;

/// Outcome of resolving one overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Axis the first box was pushed along.
    pub axis: Axis,
    /// Penetration depth on that axis before separation.
    pub penetration: f64,
    /// Energy taken from each of the two boxes.
    pub energy_loss: f64,
}

/// Penetration depth of `a` into `b` on x, y and z.
///
/// On each axis this is the shorter of the two distances that would pull the
/// intervals apart, so it is positive exactly when they overlap on that axis.
pub fn penetration_depths(a: &BoxState, b: &BoxState) -> [f64; 3] {
    let (a, b) = (a.aabb(), b.aabb());
    Axis::ALL.map(|axis| a.penetration(&b, axis))
}

/// Picks the axis to separate along: the one with the strictly smallest depth.
///
/// When no axis is strictly smallest (two or three depths tie for the minimum)
/// the z axis is chosen.
///
/// # Example
/// ```
/// use rs_box_physics::interactions::select_separation_axis;
/// use rs_box_physics::models::Axis;
///
/// assert_eq!(select_separation_axis([5.0, 10.0, 10.0]), Axis::X);
/// assert_eq!(select_separation_axis([8.0, 2.0, 3.0]), Axis::Y);
/// assert_eq!(select_separation_axis([4.0, 4.0, 9.0]), Axis::Z);
/// ```
pub fn select_separation_axis(depths: [f64; 3]) -> Axis {
    let [x, y, z] = depths;
    if x < y && x < z {
        Axis::X
    } else if y < x && y < z {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Pushes `a` out of `b` along `axis` until the two sit flush.
///
/// `a` moves to whichever side of `b` its centre is on; ties go to the far
/// side. `b` never moves.
pub fn separate(a: &mut BoxState, b: &BoxState, axis: Axis) {
    let (a_box, b_box) = (a.aabb(), b.aabb());
    let new_min = if a_box.center(axis) < b_box.center(axis) {
        b_box.min.get(axis) - a.extent(axis)
    } else {
        b_box.max.get(axis)
    };
    *a.position.get_mut(axis) = new_min;
}

/// Applies the energy-loss bounce to both boxes along `axis`.
///
/// Each box loses `clamp(a.energy, 0, max_energy_loss)` energy. Energy itself
/// is not clamped and may go negative on `b`. The velocity component along
/// `axis` of both boxes is reversed, scaled by the restitution factor and
/// divided by the drag divisor. On the y axis, which gravity acts along, a
/// reversed component slower than `rest_velocity_threshold` is zeroed, leaving
/// the box in resting contact. Bounces along x and z are never cut off.
///
/// # Returns
/// The energy taken from each box.
pub fn resolve_energy_loss(a: &mut BoxState, b: &mut BoxState, axis: Axis, constants: &SimulationConstants) -> f64 {
    let energy_loss = a.energy.min(constants.max_energy_loss).max(0.0);
    a.energy -= energy_loss;
    b.energy -= energy_loss;

    let factor = constants.restitution(energy_loss) / constants.drag;
    for state in [a, b] {
        let component = state.velocity.get_mut(axis);
        *component = -*component * factor;
        if axis == Axis::Y && component.abs() < constants.rest_velocity_threshold {
            *component = 0.0;
        }
    }
    energy_loss
}

/// Resolves a pair already known to overlap.
///
/// Chooses the separation axis from the penetration depths, moves `a` flush
/// against `b` along it, then bounces both boxes on that axis.
///
/// # Example
/// ```
/// use rs_box_physics::interactions::{overlaps, resolve};
/// use rs_box_physics::models::{Axis, Axis3D, BoxState, Orientation3D, TickMode};
/// use rs_box_physics::SimulationConstants;
///
/// let mut a = BoxState::new(Axis3D::new(0.0, 0.0, 0.0), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
/// let mut b = BoxState::new(Axis3D::new(5.0, 0.0, 0.0), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
///
/// let collision = resolve(&mut a, &mut b, &SimulationConstants::default());
/// assert_eq!(collision.axis, Axis::X);
/// assert_eq!(a.position.x, -5.0);
/// assert!(!overlaps(&a, &b));
/// ```
pub fn resolve(a: &mut BoxState, b: &mut BoxState, constants: &SimulationConstants) -> Collision {
    let depths = penetration_depths(a, b);
    let axis = select_separation_axis(depths);
    let penetration = match axis {
        Axis::X => depths[0],
        Axis::Y => depths[1],
        Axis::Z => depths[2],
    };

    separate(a, b, axis);
    let energy_loss = resolve_energy_loss(a, b, axis, constants);
    trace!("Resolved collision along {:?} (penetration: {}, energy loss: {})", axis, penetration, energy_loss);

    Collision { axis, penetration, energy_loss }
}

/// Tests the pair and resolves it if the boxes overlap.
pub fn collide(a: &mut BoxState, b: &mut BoxState, constants: &SimulationConstants) -> Option<Collision> {
    if overlaps(a, b) {
        Some(resolve(a, b, constants))
    } else {
        None
    }
}
