use crate::models::BoxState;
use crate::utils::SimulationConstants;

/// Adds gravity proportional to the unsupported fraction to the box's y velocity.
///
/// # Arguments
/// * `state` - The box to accelerate.
/// * `unsupported_fraction` - Share of bottom samples with nothing underneath, in `[0, 1]`.
/// * `constants` - Supplies `gravity`, whose sign is the fall direction.
///
/// # Example
/// ```
/// use rs_box_physics::forces::apply_support_gravity;
/// use rs_box_physics::models::{Axis3D, BoxState, Orientation3D, TickMode};
/// use rs_box_physics::SimulationConstants;
///
/// let mut state = BoxState::new(Axis3D::zero(), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
/// apply_support_gravity(&mut state, 0.5, &SimulationConstants::default());
/// assert_eq!(state.velocity.y, 0.25);
/// ```
pub fn apply_support_gravity(state: &mut BoxState, unsupported_fraction: f64, constants: &SimulationConstants) {
    state.velocity.y += unsupported_fraction * constants.gravity;
}

/// Adds wobble proportional to the unsupported fraction about the x and y axes.
///
/// Only the magnitude of the missing support is modelled: the box does not lean
/// towards the side that lacks support.
pub fn apply_support_torque(state: &mut BoxState, unsupported_fraction: f64, constants: &SimulationConstants) {
    let torque = unsupported_fraction * constants.torque_coefficient;
    state.angular_velocity.x += torque;
    state.angular_velocity.y += torque;
}

/// Applies both gravity and torque for a partially supported box.
///
/// Does nothing for a fully supported box (`unsupported_fraction <= 0`).
pub fn apply_gravity_and_torque(state: &mut BoxState, unsupported_fraction: f64, constants: &SimulationConstants) {
    if unsupported_fraction <= 0.0 {
        return;
    }
    apply_support_gravity(state, unsupported_fraction, constants);
    apply_support_torque(state, unsupported_fraction, constants);
}
