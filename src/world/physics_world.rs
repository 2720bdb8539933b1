//! The box world: owns every `BoxState` and advances them one tick at a time.
//!
//! A tick runs in two phases:
//! 1. Every `TickMode::Full` box, in creation order, is sampled for support,
//!    accelerated by gravity and torque, moved, and damped. Later boxes see
//!    the already-advanced state of earlier ones.
//! 2. Every unordered pair with at least one colliding box is tested for
//!    overlap and resolved. Only one box of a pair is moved: the one with the
//!    higher tick mode, or the newer one when the modes match. `TickMode::None`
//!    platforms never move, and a box dropped onto an older one is lifted
//!    out rather than driving the older box through its support.
//!
//! The pair sweep is O(n²) with no broad phase, which is fine for the tens of
//! boxes a sandbox holds.
use log::{debug, error, warn};
use rayon::prelude::*;
use crate::integration::{advance, reset_if_tipped};
use crate::interactions::collide;
use crate::models::{Axis3D, BoxId, BoxSnapshot, BoxState, FromCoordinates, Orientation3D, TickMode, Velocity3D};
use crate::support::{sample_columns, unsupported_fraction};
use crate::utils::{PhysicsError, SimulationConstants};

/// What happened during one call to `PhysicsWorld::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    /// Boxes that ran gravity and integration.
    pub integrated: usize,
    /// Overlapping pairs that were resolved.
    pub collisions: usize,
    /// Boxes stood back up by the tipping reset.
    pub tipped: usize,
}

#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    boxes: Vec<BoxState>,
    constants: SimulationConstants,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Creates an empty world with the default constants.
    ///
    /// The defaults use screen-space y: gravity pulls towards increasing y, so a
    /// box rests on another when its max-y face (`y + height`) is within the
    /// support tolerance of the other box's min-y face. Use
    /// `with_constants(SimulationConstants::y_up())` for a world where a box rests
    /// with its `y` on `other.y + other.height`.
    ///
    /// # Example
    /// ```
    /// use rs_box_physics::{PhysicsWorld, SimulationConstants, TickMode};
    ///
    /// let mut screen = PhysicsWorld::new();
    /// screen.create_box_with((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), 100.0, 10.0, 100.0, TickMode::None, 1);
    /// let hanging = screen.create_box_with((0.0, -10.0, 0.0), (0.0, 0.0, 0.0), 10.0, 10.0, 10.0, TickMode::Full, 1);
    /// screen.tick();
    /// assert_eq!(screen.get(hanging).unwrap().velocity.y, 0.0);
    ///
    /// let mut upright = PhysicsWorld::with_constants(SimulationConstants::y_up()).unwrap();
    /// upright.create_box_with((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), 100.0, 10.0, 100.0, TickMode::None, 1);
    /// let atop = upright.create_box_with((0.0, 10.0, 0.0), (0.0, 0.0, 0.0), 10.0, 10.0, 10.0, TickMode::Full, 1);
    /// upright.tick();
    /// assert_eq!(upright.get(atop).unwrap().velocity.y, 0.0);
    /// ```
    pub fn new() -> Self {
        PhysicsWorld {
            boxes: Vec::new(),
            constants: SimulationConstants::default(),
        }
    }

    /// Creates an empty world with custom constants.
    ///
    /// # Errors
    /// Returns the first problem `SimulationConstants::validate` finds.
    ///
    /// # Example
    /// ```
    /// use rs_box_physics::{PhysicsWorld, SimulationConstants};
    ///
    /// assert!(PhysicsWorld::with_constants(SimulationConstants::y_up()).is_ok());
    /// assert!(PhysicsWorld::with_constants(SimulationConstants::new(None, Some(0.9), None, None, None)).is_err());
    /// ```
    pub fn with_constants(constants: SimulationConstants) -> Result<Self, PhysicsError> {
        constants.validate()?;
        Ok(PhysicsWorld {
            boxes: Vec::new(),
            constants,
        })
    }

    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }

    /// Spawns a `TickMode::Full` box with the default sample count.
    ///
    /// See `create_box_with` for how bad input is handled.
    ///
    /// # Example
    /// ```
    /// use rs_box_physics::PhysicsWorld;
    ///
    /// let mut world = PhysicsWorld::new();
    /// let id = world.create_box((0.0, 50.0, 0.0), (0.0, 0.0, 0.0), 10.0, 10.0, 10.0);
    /// let state = world.get(id).unwrap();
    /// assert_eq!(state.position.y, 50.0);
    /// assert_eq!(state.bottom_points, 100);
    /// assert_eq!(state.energy, 100.0);
    /// ```
    pub fn create_box(
        &mut self,
        position: (f64, f64, f64),
        orientation: (f64, f64, f64),
        width: f64,
        height: f64,
        depth: f64,
    ) -> BoxId {
        let bottom_points = self.constants.default_bottom_points;
        self.create_box_with(position, orientation, width, height, depth, TickMode::Full, bottom_points)
    }

    /// Spawns a box, repairing invalid input instead of failing.
    ///
    /// When `try_create_box` rejects the input, the error is logged, negative
    /// dimensions are replaced by their absolute values, a zero sample count
    /// becomes one, non-finite coordinates become zero, and the repaired box is
    /// spawned. A zero or non-finite width or depth becomes `sample_spacing`, so
    /// the repaired box always has a footprint other boxes can land on.
    #[allow(clippy::too_many_arguments)]
    pub fn create_box_with(
        &mut self,
        position: (f64, f64, f64),
        orientation: (f64, f64, f64),
        width: f64,
        height: f64,
        depth: f64,
        tick_mode: TickMode,
        bottom_points: usize,
    ) -> BoxId {
        match self.try_create_box(position, orientation, width, height, depth, tick_mode, bottom_points) {
            Ok(id) => id,
            Err(e) => {
                error!("Error creating box: {}", e);
                warn!("Using absolute dimensions, finite coordinates and at least one sample point");
                let finite = |value: f64| if value.is_finite() { value } else { 0.0 };
                let fallback_extent = self.constants.sample_spacing;
                let extent = |value: f64| {
                    let value = finite(value).abs();
                    if value > 0.0 { value } else { fallback_extent }
                };
                let position = (finite(position.0), finite(position.1), finite(position.2));
                let orientation = (finite(orientation.0), finite(orientation.1), finite(orientation.2));
                let state = BoxState::new(
                    Axis3D::from_coord(position),
                    Orientation3D::from_coord(orientation),
                    extent(width),
                    finite(height).abs(),
                    extent(depth),
                    tick_mode,
                    bottom_points.max(1),
                    self.constants.initial_energy,
                );
                self.push(state)
            }
        }
    }

    /// Spawns a box after validating its geometry.
    ///
    /// # Errors
    /// * `InvalidDimension` if `width` or `depth` is not strictly positive, or
    ///   `height` is negative (flat platforms of height zero are allowed).
    /// * `InvalidPosition` if any coordinate or angle is not finite.
    /// * `InvalidSampleCount` if a `TickMode::Full` box has no bottom samples.
    #[allow(clippy::too_many_arguments)]
    pub fn try_create_box(
        &mut self,
        position: (f64, f64, f64),
        orientation: (f64, f64, f64),
        width: f64,
        height: f64,
        depth: f64,
        tick_mode: TickMode,
        bottom_points: usize,
    ) -> Result<BoxId, PhysicsError> {
        let position = Axis3D::from_coord(position);
        let orientation = Orientation3D::from_coord(orientation);

        if !position.is_finite() || !orientation.is_finite() {
            return Err(PhysicsError::InvalidPosition);
        }
        if !(width > 0.0 && depth > 0.0 && height >= 0.0) || !(width.is_finite() && height.is_finite() && depth.is_finite()) {
            return Err(PhysicsError::InvalidDimension);
        }
        if tick_mode.integrates() && bottom_points == 0 {
            return Err(PhysicsError::InvalidSampleCount);
        }

        let state = BoxState::new(
            position,
            orientation,
            width,
            height,
            depth,
            tick_mode,
            bottom_points,
            self.constants.initial_energy,
        );
        Ok(self.push(state))
    }

    fn push(&mut self, state: BoxState) -> BoxId {
        if state.tick_mode.integrates() && state.width < self.constants.sample_spacing {
            warn!(
                "Box width {} is narrower than one support column ({}); sampling a single column",
                state.width, self.constants.sample_spacing
            );
        }
        debug!(
            "Created {:?} box #{} at ({}, {}, {}) with {} support columns",
            state.tick_mode,
            self.boxes.len(),
            state.position.x,
            state.position.y,
            state.position.z,
            sample_columns(state.width, self.constants.sample_spacing)
        );
        self.boxes.push(state);
        BoxId(self.boxes.len() - 1)
    }

    /// Advances the world by one tick.
    ///
    /// # Example
    /// ```
    /// use rs_box_physics::PhysicsWorld;
    ///
    /// let mut world = PhysicsWorld::new();
    /// let id = world.create_box((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), 10.0, 10.0, 10.0);
    /// let summary = world.tick();
    ///
    /// assert_eq!(summary.integrated, 1);
    /// assert_eq!(world.get(id).unwrap().position.y, 0.5);
    /// ```
    pub fn tick(&mut self) -> TickSummary {
        let mut summary = TickSummary::default();

        for index in 0..self.boxes.len() {
            if !self.boxes[index].tick_mode.integrates() {
                continue;
            }
            let fraction = unsupported_fraction(&self.boxes, index, &self.constants);
            let state = &mut self.boxes[index];
            advance(state, fraction, &self.constants);
            if reset_if_tipped(state, &self.constants) {
                summary.tipped += 1;
            }
            summary.integrated += 1;
        }

        for older in 0..self.boxes.len() {
            for newer in older + 1..self.boxes.len() {
                let (older_mode, newer_mode) = (self.boxes[older].tick_mode, self.boxes[newer].tick_mode);
                if !older_mode.collides() && !newer_mode.collides() {
                    continue;
                }
                let (mover, obstacle) = if newer_mode >= older_mode { (newer, older) } else { (older, newer) };
                let (a, b) = pair_mut(&mut self.boxes, mover, obstacle);
                if collide(a, b, &self.constants).is_some() {
                    summary.collisions += 1;
                }
            }
        }

        debug!(
            "Tick: {} integrated, {} collisions, {} tipped",
            summary.integrated, summary.collisions, summary.tipped
        );
        summary
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Every box, in creation order. `BoxId::index` is the position in this slice.
    pub fn boxes(&self) -> &[BoxState] {
        &self.boxes
    }

    /// # Errors
    /// Returns `BoxNotFound` if `id` was not issued by this world.
    pub fn get(&self, id: BoxId) -> Result<&BoxState, PhysicsError> {
        self.boxes.get(id.index()).ok_or(PhysicsError::BoxNotFound(id))
    }

    /// Overwrites the linear velocity of a box, e.g. to launch a freshly spawned one.
    ///
    /// # Errors
    /// * `BoxNotFound` if `id` was not issued by this world.
    /// * `InvalidVelocity` if any component is not finite.
    pub fn set_velocity(&mut self, id: BoxId, velocity: (f64, f64, f64)) -> Result<(), PhysicsError> {
        let velocity = Velocity3D::from_coord(velocity);
        if !velocity.is_finite() {
            return Err(PhysicsError::InvalidVelocity);
        }
        let state = self.boxes.get_mut(id.index()).ok_or(PhysicsError::BoxNotFound(id))?;
        state.velocity = velocity;
        Ok(())
    }

    /// Render snapshots of every box, built in parallel.
    pub fn snapshots(&self) -> Vec<BoxSnapshot> {
        self.boxes
            .par_iter()
            .enumerate()
            .map(|(index, state)| BoxSnapshot::from_state(BoxId(index), state))
            .collect()
    }

    /// Current unsupported fraction of every box, computed in parallel.
    ///
    /// Read-only: unlike `tick`, every box is measured against the same state.
    /// Boxes that never integrate report the value they would get if they did.
    pub fn support_fractions(&self) -> Vec<f64> {
        (0..self.boxes.len())
            .into_par_iter()
            .map(|index| unsupported_fraction(&self.boxes, index, &self.constants))
            .collect()
    }
}

/// Borrows two distinct boxes mutably.
fn pair_mut(boxes: &mut [BoxState], first: usize, second: usize) -> (&mut BoxState, &mut BoxState) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = boxes.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = boxes.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
