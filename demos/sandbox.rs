// Headless run of the box sandbox.
//
// RUST_LOG=info cargo run --example sandbox -- 40 3000

use std::env;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_box_physics::apis::{Sandbox, SpawnRegion};

fn arg_or(index: usize, default: u64) -> u64 {
    match env::args().nth(index).map(|arg| arg.parse::<u64>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            warn!("Ignoring argument {}: {}", index, e);
            default
        }
        None => default,
    }
}

fn main() {
    env_logger::init();

    let boxes = arg_or(1, 25) as usize;
    let frames = arg_or(2, 2000);

    let mut sandbox = Sandbox::new();
    let mut rng = StdRng::seed_from_u64(2024);
    if let Err(e) = sandbox.spawn_random(&mut rng, boxes, &SpawnRegion::default()) {
        warn!("Could not spawn boxes: {}", e);
    }
    // The camera box from the interactive scene.
    sandbox.spawn_at((510.0, -320.0, 470.0), (0.0, 0.0, 0.0));

    for frame in 1..=frames {
        let summary = sandbox.step();
        if frame % 250 == 0 {
            let stats = sandbox.stats();
            info!(
                "frame {:>5} | parts: {} | collisions this frame: {} | total: {}",
                stats.frames, stats.boxes, summary.collisions, stats.collisions
            );
        }
    }

    let resting = sandbox
        .world()
        .support_fractions()
        .iter()
        .skip(1)
        .filter(|&&fraction| fraction == 0.0)
        .count();
    info!("{} of {} boxes fully supported after {} frames", resting, sandbox.stats().boxes - 1, frames);
    for snapshot in sandbox.render_snapshots().iter().skip(1).take(5) {
        let anchor = snapshot.anchor();
        info!("box #{} anchor ({:.1}, {:.1}, {:.1})", snapshot.id.index(), anchor.x, anchor.y, anchor.z);
    }
}
