// src/integration/integrator.rs

use log::trace;
use crate::forces::apply_gravity_and_torque;
use crate::models::BoxState;
use crate::utils::SimulationConstants;

/// Moves the box by one tick of its current velocity.
pub fn integrate_position(state: &mut BoxState) {
    state.position.translate(&state.velocity);
}

/// Divides every linear and angular velocity component by the drag divisor.
///
/// With `drag > 1` every component shrinks towards zero by the same factor each tick.
/// The damping is per tick, not per second.
pub fn apply_drag(state: &mut BoxState, constants: &SimulationConstants) {
    state.velocity.damp(constants.drag);
    state.angular_velocity.damp(constants.drag);
}

/// Advances a box by one tick.
///
/// In order: gravity and torque for the unsupported share of the bottom face,
/// then `position += velocity`, then drag.
///
/// # Arguments
/// * `state` - The box to advance.
/// * `unsupported_fraction` - Result of support analysis for this tick.
/// * `constants` - Gravity, torque and drag terms.
///
/// # Example
/// ```
/// use rs_box_physics::integration::advance;
/// use rs_box_physics::models::{Axis3D, BoxState, Orientation3D, TickMode};
/// use rs_box_physics::SimulationConstants;
///
/// let constants = SimulationConstants::default();
/// let mut state = BoxState::new(Axis3D::zero(), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
/// advance(&mut state, 1.0, &constants);
///
/// assert_eq!(state.position.y, 0.5);
/// assert!((state.velocity.y - 0.5 / 1.1).abs() < 1e-12);
/// ```
pub fn advance(state: &mut BoxState, unsupported_fraction: f64, constants: &SimulationConstants) {
    apply_gravity_and_torque(state, unsupported_fraction, constants);
    integrate_position(state);
    apply_drag(state, constants);
}

/// Stands a box back up once it leans past `constants.tipping_threshold`.
///
/// The x and y angles and angular velocities are zeroed, and the box is kept
/// from sinking past `ground_level` in the fall direction. Returns whether a
/// reset happened. Does nothing when no threshold is configured.
pub fn reset_if_tipped(state: &mut BoxState, constants: &SimulationConstants) -> bool {
    let Some(threshold) = constants.tipping_threshold else {
        return false;
    };
    if state.orientation.x.abs() <= threshold && state.orientation.y.abs() <= threshold {
        return false;
    }

    trace!("Resetting tipped box (angle_x: {}, angle_y: {})", state.orientation.x, state.orientation.y);
    if constants.falls_towards_positive_y() {
        state.position.y = state.position.y.min(constants.ground_level - state.height);
    } else {
        state.position.y = state.position.y.max(constants.ground_level);
    }
    state.angular_velocity.x = 0.0;
    state.angular_velocity.y = 0.0;
    state.orientation.x = 0.0;
    state.orientation.y = 0.0;
    true
}
