use wasm_bindgen_test::*;
use rs_box_physics_wasm::{WasmSandbox, SNAPSHOT_STRIDE};

#[wasm_bindgen_test]
fn snapshot_has_one_stride_per_box() {
    let mut sandbox = WasmSandbox::new();
    sandbox.spawn_box(0.0, -200.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    sandbox.step();

    let snapshot = sandbox.snapshot();
    assert_eq!(snapshot.length() as usize, 2 * SNAPSHOT_STRIDE);
    assert_eq!(snapshot.get_index(SNAPSHOT_STRIDE as u32 + 6), 100.0);
}
