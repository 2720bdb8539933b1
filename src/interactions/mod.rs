mod collision_detection;
mod collision_resolution;

pub use collision_detection::*;
pub use collision_resolution::*;

#[cfg(test)]
mod collision_detection_tests;
