mod objects;
mod box_state;
mod aabb;
mod snapshot;

pub use objects::*;
pub use box_state::*;
pub use aabb::*;
pub use snapshot::*;

#[cfg(test)]
mod box_state_tests;
#[cfg(test)]
mod aabb_tests;
#[cfg(test)]
mod snapshot_tests;
