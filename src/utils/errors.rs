use std::fmt;
use std::error::Error;
use crate::models::BoxId;

/// Represents errors that can occur while configuring or populating a box world.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates a box dimension that cannot describe an AABB (e.g., zero width or negative height).
    InvalidDimension,
    /// Indicates a support sample count of zero on a box that runs support analysis.
    InvalidSampleCount,
    /// Indicates an invalid coefficient value (e.g., a drag divisor that does not damp).
    InvalidCoefficient,
    /// Indicates a non-finite position or orientation.
    InvalidPosition,
    /// Indicates a non-finite velocity value.
    InvalidVelocity,
    /// Indicates a box handle that does not belong to the world.
    BoxNotFound(BoxId),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidDimension => write!(f, "Invalid box dimension"),
            PhysicsError::InvalidSampleCount => write!(f, "Invalid support sample count"),
            PhysicsError::InvalidCoefficient => write!(f, "Invalid coefficient value"),
            PhysicsError::InvalidPosition => write!(f, "Invalid position or orientation"),
            PhysicsError::InvalidVelocity => write!(f, "Invalid velocity value"),
            PhysicsError::BoxNotFound(id) => write!(f, "No box with id {}", id.index()),
        }
    }
}

impl Error for PhysicsError {}
