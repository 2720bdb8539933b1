use crate::utils;

pub const DEFAULT_SIMULATION_CONSTANTS: utils::SimulationConstants = utils::SimulationConstants {
    gravity: 0.5,
    drag: 1.1,
    torque_coefficient: 0.05,
    support_tolerance: 1.0,
    sample_spacing: 10.0,
    max_energy_loss: 10.0,
    initial_energy: 100.0,
    default_bottom_points: 100,
    rest_velocity_threshold: 0.5,
    tipping_threshold: None,
    ground_level: 0.0,
};

/// Width, height and depth of a box spawned by the sandbox when none is given.
pub const DEFAULT_BOX_SIZE: f64 = 100.0;

/// Edge length of the square ground platform created by the sandbox.
pub const GROUND_PLATFORM_SIZE: f64 = 1000.0;
