mod gravity_torque;

pub use gravity_torque::*;
