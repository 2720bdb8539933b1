// src/utils/constants_config.rs
use crate::utils::{
    DEFAULT_SIMULATION_CONSTANTS,
    PhysicsError
};

/// Tunables of the box simulation.
///
/// Gravity and drag are per-tick quantities, so they assume the driver calls
/// `tick()` at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConstants {
    /// Velocity added along y per tick when no bottom sample is supported.
    /// The sign is the fall direction: positive pulls towards increasing y.
    pub gravity: f64,
    /// Divisor applied to every velocity component once per tick. Must be greater than 1.
    pub drag: f64,
    /// Angular velocity added about x and y per tick when no bottom sample is supported.
    pub torque_coefficient: f64,
    /// Largest gap between a resting face and a supporting face that still counts as contact.
    pub support_tolerance: f64,
    /// Spacing of the bottom-face sample grid, which is also the width of one grid column.
    pub sample_spacing: f64,
    /// Upper bound on the energy a single collision can take from a box.
    pub max_energy_loss: f64,
    /// Energy of a freshly created box. Collision losses are percentages of this budget.
    pub initial_energy: f64,
    /// Sample count used when the caller does not pick one.
    pub default_bottom_points: usize,
    /// A bounce along y slower than this ends in resting contact instead. Sideways bounces are not affected.
    pub rest_velocity_threshold: f64,
    /// Angle in degrees past which a box is reset upright, or `None` to never reset.
    pub tipping_threshold: Option<f64>,
    /// Floor a tipped box is kept from sinking through.
    pub ground_level: f64,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONSTANTS
    }
}

impl SimulationConstants {
    pub fn new(
        gravity: Option<f64>,
        drag: Option<f64>,
        torque_coefficient: Option<f64>,
        support_tolerance: Option<f64>,
        sample_spacing: Option<f64>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONSTANTS;
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            drag: drag.unwrap_or(default.drag),
            torque_coefficient: torque_coefficient.unwrap_or(default.torque_coefficient),
            support_tolerance: support_tolerance.unwrap_or(default.support_tolerance),
            sample_spacing: sample_spacing.unwrap_or(default.sample_spacing),
            ..default
        }
    }

    /// Preset for scenes where up is positive y: identical to the defaults
    /// with gravity pulling towards decreasing y.
    ///
    /// # Example
    /// ```
    /// use rs_box_physics::SimulationConstants;
    ///
    /// let constants = SimulationConstants::y_up();
    /// assert_eq!(constants.gravity, -0.5);
    /// assert!(!constants.falls_towards_positive_y());
    /// ```
    pub fn y_up() -> Self {
        Self {
            gravity: -DEFAULT_SIMULATION_CONSTANTS.gravity,
            ..DEFAULT_SIMULATION_CONSTANTS
        }
    }

    pub fn with_tipping_threshold(mut self, degrees: f64) -> Self {
        self.tipping_threshold = Some(degrees);
        self
    }

    /// Whether unsupported boxes move towards increasing y.
    pub fn falls_towards_positive_y(&self) -> bool {
        self.gravity >= 0.0
    }

    /// Restitution factor for a collision that took `energy_loss` from the box budget.
    pub fn restitution(&self, energy_loss: f64) -> f64 {
        1.0 - energy_loss / self.initial_energy
    }

    /// Checks that the constants describe a damped, well-formed simulation.
    ///
    /// # Errors
    /// * `InvalidCoefficient` if `drag <= 1`, or if the gravity, torque, tolerance,
    ///   energy or rest terms are non-finite or out of range.
    /// * `InvalidDimension` if `sample_spacing` is not strictly positive.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let finite = [
            self.gravity,
            self.drag,
            self.torque_coefficient,
            self.support_tolerance,
            self.sample_spacing,
            self.max_energy_loss,
            self.initial_energy,
            self.rest_velocity_threshold,
            self.ground_level,
        ];
        if finite.iter().any(|value| !value.is_finite()) {
            return Err(PhysicsError::InvalidCoefficient);
        }
        if self.drag <= 1.0 { return Err(PhysicsError::InvalidCoefficient); }
        if self.support_tolerance < 0.0 { return Err(PhysicsError::InvalidCoefficient); }
        if self.max_energy_loss < 0.0 { return Err(PhysicsError::InvalidCoefficient); }
        if self.rest_velocity_threshold < 0.0 { return Err(PhysicsError::InvalidCoefficient); }
        if self.initial_energy <= 0.0 { return Err(PhysicsError::InvalidCoefficient); }
        if self.sample_spacing <= 0.0 { return Err(PhysicsError::InvalidDimension); }
        if let Some(threshold) = self.tipping_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(PhysicsError::InvalidCoefficient);
            }
        }
        Ok(())
    }
}
