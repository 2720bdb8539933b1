mod sandbox;

pub use sandbox::*;
