// src/apis/sandbox.rs

use std::ops::Range;
use log::{debug, info};
use rand::Rng;
use crate::models::{BoxId, BoxSnapshot, TickMode};
use crate::utils::{PhysicsError, SimulationConstants, DEFAULT_BOX_SIZE, GROUND_PLATFORM_SIZE};
use crate::world::{PhysicsWorld, TickSummary};

/// The numbers a sandbox HUD shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SandboxStats {
    /// Boxes in the world, ground platform included.
    pub boxes: usize,
    /// Calls to `Sandbox::step` so far.
    pub frames: u64,
    /// Collisions resolved over every frame.
    pub collisions: u64,
}

/// Axis ranges that `Sandbox::spawn_random` draws box corners from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRegion {
    pub x: Range<f64>,
    pub y: Range<f64>,
    pub z: Range<f64>,
}

impl Default for SpawnRegion {
    /// Above the default ground platform, with room for a whole box on it.
    fn default() -> Self {
        SpawnRegion {
            x: 0.0..GROUND_PLATFORM_SIZE - DEFAULT_BOX_SIZE,
            y: -1000.0..-200.0,
            z: 0.0..GROUND_PLATFORM_SIZE - DEFAULT_BOX_SIZE,
        }
    }
}

impl SpawnRegion {
    fn is_valid(&self) -> bool {
        [&self.x, &self.y, &self.z]
            .iter()
            .all(|range| range.start.is_finite() && range.end.is_finite() && range.start < range.end)
    }
}

/// A ready-made box scene: a static ground platform and a stream of falling boxes.
///
/// This struct wraps a `PhysicsWorld` with the scene conventions of the
/// interactive sandbox: a `1000 x 0 x 1000` platform at the origin, boxes of
/// `100 x 100 x 100`, and per-frame statistics for a HUD.
pub struct Sandbox {
    world: PhysicsWorld,
    ground: BoxId,
    frames: u64,
    collisions: u64,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    /// Creates a sandbox with the default constants and the ground platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_box_physics::apis::Sandbox;
    ///
    /// let sandbox = Sandbox::new();
    /// assert_eq!(sandbox.stats().boxes, 1);
    /// ```
    pub fn new() -> Self {
        Self::with_world(PhysicsWorld::new())
    }

    /// Creates a sandbox with custom constants.
    ///
    /// # Arguments
    ///
    /// * `constants` - The tunables of the underlying world
    ///
    /// # Returns
    ///
    /// * `Ok(Sandbox)` - A sandbox holding only the ground platform
    /// * `Err(PhysicsError)` - If `constants` fail validation
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_box_physics::apis::Sandbox;
    /// use rs_box_physics::SimulationConstants;
    ///
    /// let sandbox = Sandbox::with_constants(SimulationConstants::y_up()).unwrap();
    /// assert_eq!(sandbox.world().constants().gravity, -0.5);
    /// ```
    pub fn with_constants(constants: SimulationConstants) -> Result<Self, PhysicsError> {
        Ok(Self::with_world(PhysicsWorld::with_constants(constants)?))
    }

    fn with_world(mut world: PhysicsWorld) -> Self {
        let ground = world.create_box_with(
            (0.0, 0.0, 0.0),
            (0.0, 0.0, 0.0),
            GROUND_PLATFORM_SIZE,
            0.0,
            GROUND_PLATFORM_SIZE,
            TickMode::None,
            1,
        );
        Sandbox {
            world,
            ground,
            frames: 0,
            collisions: 0,
        }
    }

    /// The handle of the ground platform.
    pub fn ground(&self) -> BoxId {
        self.ground
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    /// Spawns a default-sized box, e.g. at the camera position.
    ///
    /// # Arguments
    ///
    /// * `position` - The minimum corner of the box
    /// * `orientation` - Euler angles in degrees
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_box_physics::apis::Sandbox;
    ///
    /// let mut sandbox = Sandbox::new();
    /// let id = sandbox.spawn_at((510.0, -320.0, 470.0), (0.0, 0.0, 0.0));
    /// assert_eq!(sandbox.world().get(id).unwrap().width, 100.0);
    /// ```
    pub fn spawn_at(&mut self, position: (f64, f64, f64), orientation: (f64, f64, f64)) -> BoxId {
        self.world.create_box(position, orientation, DEFAULT_BOX_SIZE, DEFAULT_BOX_SIZE, DEFAULT_BOX_SIZE)
    }

    /// Scatters `count` default-sized boxes with corners drawn uniformly from `region`
    /// and a random heading about the y axis.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` if any range of `region` is empty or not finite.
    /// Nothing is spawned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rs_box_physics::apis::{Sandbox, SpawnRegion};
    ///
    /// let mut sandbox = Sandbox::new();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let ids = sandbox.spawn_random(&mut rng, 5, &SpawnRegion::default()).unwrap();
    /// assert_eq!(ids.len(), 5);
    /// assert_eq!(sandbox.stats().boxes, 6);
    /// ```
    pub fn spawn_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        region: &SpawnRegion,
    ) -> Result<Vec<BoxId>, PhysicsError> {
        if !region.is_valid() {
            return Err(PhysicsError::InvalidPosition);
        }
        let ids = (0..count)
            .map(|_| {
                let position = (
                    rng.random_range(region.x.clone()),
                    rng.random_range(region.y.clone()),
                    rng.random_range(region.z.clone()),
                );
                let heading = rng.random_range(0.0..360.0);
                self.spawn_at(position, (0.0, heading, 0.0))
            })
            .collect();
        debug!("Spawned {} random boxes", count);
        Ok(ids)
    }

    /// Advances the world one frame and updates the statistics.
    pub fn step(&mut self) -> TickSummary {
        let summary = self.world.tick();
        self.frames += 1;
        self.collisions += summary.collisions as u64;
        if self.frames % 600 == 0 {
            let stats = self.stats();
            info!("Frame {}: {} boxes, {} collisions so far", stats.frames, stats.boxes, stats.collisions);
        }
        summary
    }

    /// Runs `frames` steps and returns the resulting statistics.
    pub fn run(&mut self, frames: u64) -> SandboxStats {
        for _ in 0..frames {
            self.step();
        }
        self.stats()
    }

    /// Everything a renderer needs to draw the current frame.
    pub fn render_snapshots(&self) -> Vec<BoxSnapshot> {
        self.world.snapshots()
    }

    pub fn stats(&self) -> SandboxStats {
        SandboxStats {
            boxes: self.world.len(),
            frames: self.frames,
            collisions: self.collisions,
        }
    }
}
