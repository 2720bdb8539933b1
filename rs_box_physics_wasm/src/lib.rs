// rs_box_physics_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the box sandbox.

use wasm_bindgen::prelude::*;
use js_sys::Float64Array;
use rs_box_physics::apis::Sandbox;
use rs_box_physics::models::ToCoordinates;

/// Values per box in `WasmSandbox::snapshot`.
pub const SNAPSHOT_STRIDE: usize = 9;

#[wasm_bindgen]
pub struct WasmSandbox {
    sandbox: Sandbox,
}

impl Default for WasmSandbox {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSandbox {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            sandbox: Sandbox::new(),
        }
    }

    /// Spawns a default-sized box and returns its index in `snapshot`.
    #[wasm_bindgen]
    pub fn spawn_box(&mut self, x: f64, y: f64, z: f64, angle_x: f64, angle_y: f64, angle_z: f64) -> Result<usize, JsValue> {
        if ![x, y, z, angle_x, angle_y, angle_z].iter().all(|value| value.is_finite()) {
            web_sys::console::warn_1(&JsValue::from_str("spawn_box called with a non-finite coordinate"));
            return Err(JsValue::from_str("Position and orientation must be finite"));
        }
        Ok(self.sandbox.spawn_at((x, y, z), (angle_x, angle_y, angle_z)).index())
    }

    /// Advances one frame and returns the number of collisions resolved.
    #[wasm_bindgen]
    pub fn step(&mut self) -> usize {
        self.sandbox.step().collisions
    }

    #[wasm_bindgen]
    pub fn box_count(&self) -> usize {
        self.sandbox.stats().boxes
    }

    #[wasm_bindgen]
    pub fn frame_count(&self) -> f64 {
        self.sandbox.stats().frames as f64
    }

    /// `[x, y, z, angle_x, angle_y, angle_z, width, height, depth]` for every box, in creation order.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Float64Array {
        Float64Array::from(self.snapshot_values().as_slice())
    }
}

impl WasmSandbox {
    /// The flat buffer behind `snapshot`, usable without a JS host.
    pub fn snapshot_values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.box_count() * SNAPSHOT_STRIDE);
        for state in self.sandbox.world().boxes() {
            let (x, y, z) = state.position.to_coord();
            let (angle_x, angle_y, angle_z) = state.orientation.to_coord();
            values.extend_from_slice(&[
                x,
                y,
                z,
                angle_x,
                angle_y,
                angle_z,
                state.width,
                state.height,
                state.depth,
            ]);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_values_layout() {
        let mut sandbox = WasmSandbox::new();
        let index = sandbox.spawn_box(100.0, -300.0, 200.0, 0.0, 45.0, 0.0).unwrap();

        let values = sandbox.snapshot_values();
        assert_eq!(index, 1);
        assert_eq!(sandbox.box_count(), 2);
        assert_eq!(values.len(), 2 * SNAPSHOT_STRIDE);
        assert_eq!(&values[..SNAPSHOT_STRIDE], &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1000.0, 0.0, 1000.0]);
        assert_eq!(&values[SNAPSHOT_STRIDE..], &[100.0, -300.0, 200.0, 0.0, 45.0, 0.0, 100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_step_moves_spawned_box() {
        let mut sandbox = WasmSandbox::new();
        sandbox.spawn_box(100.0, -300.0, 200.0, 0.0, 0.0, 0.0).unwrap();

        sandbox.step();
        assert_eq!(sandbox.frame_count(), 1.0);
        assert_eq!(sandbox.snapshot_values()[SNAPSHOT_STRIDE + 1], -299.5);
    }
}
