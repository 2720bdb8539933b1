use crate::models::{Aabb, Axis, Axis3D, Orientation3D, Velocity3D};

/// How much of a tick a box takes part in.
///
/// The variants are ordered: `Full` does everything `CollisionOnly` does, and
/// `CollisionOnly` does everything `None` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TickMode {
    /// Static platform. Never moves, but other boxes still rest on it and bounce off it.
    None,
    /// Skips gravity and integration, but is separated from the boxes it overlaps.
    CollisionOnly,
    /// Gravity, torque, integration, drag and collisions.
    #[default]
    Full,
}

impl TickMode {
    /// Whether the box runs support analysis, gravity and integration.
    pub fn integrates(self) -> bool {
        self >= TickMode::Full
    }

    /// Whether the box can be moved by collision resolution.
    pub fn collides(self) -> bool {
        self >= TickMode::CollisionOnly
    }
}

/// Stable handle of a box inside a `PhysicsWorld`. Boxes are never removed, so
/// the handle stays valid for the lifetime of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoxId(pub(crate) usize);

impl BoxId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// State of one dynamic box.
///
/// `position` is the minimum corner, so the box occupies
/// `[x, x + width] × [y, y + height] × [z, z + depth]`. The orientation only
/// affects rendering; collision geometry stays axis-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxState {
    pub position: Axis3D,
    pub velocity: Velocity3D,
    pub orientation: Orientation3D,
    pub angular_velocity: Velocity3D,
    /// Reserved for orientation smoothing; nothing reads it yet.
    pub target_orientation: Orientation3D,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Number of support samples taken across the bottom face.
    pub bottom_points: usize,
    /// Remaining collision budget. Starts at the initial energy and only goes down.
    pub energy: f64,
    pub tick_mode: TickMode,
}

impl BoxState {
    /// Creates a box at rest.
    ///
    /// # Example
    /// ```
    /// use rs_box_physics::models::{Axis3D, BoxState, Orientation3D, TickMode};
    ///
    /// let state = BoxState::new(Axis3D::new(0.0, 50.0, 0.0), Orientation3D::zero(), 10.0, 10.0, 10.0, TickMode::Full, 1, 100.0);
    /// assert_eq!(state.velocity.y, 0.0);
    /// assert_eq!(state.energy, 100.0);
    /// assert_eq!(state.aabb().max.y, 60.0);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Axis3D,
        orientation: Orientation3D,
        width: f64,
        height: f64,
        depth: f64,
        tick_mode: TickMode,
        bottom_points: usize,
        energy: f64,
    ) -> Self {
        BoxState {
            position,
            velocity: Velocity3D::zero(),
            orientation,
            angular_velocity: Velocity3D::zero(),
            target_orientation: Orientation3D::zero(),
            width,
            height,
            depth,
            bottom_points,
            energy,
            tick_mode,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_corner(self.position, self.width, self.height, self.depth)
    }

    /// Size of the box along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }

    /// Y coordinate of the face that rests on a support, given the fall direction.
    pub fn resting_face(&self, falls_towards_positive_y: bool) -> f64 {
        if falls_towards_positive_y {
            self.position.y + self.height
        } else {
            self.position.y
        }
    }

    /// Y coordinate of the face other boxes rest on, given the fall direction.
    pub fn supporting_face(&self, falls_towards_positive_y: bool) -> f64 {
        if falls_towards_positive_y {
            self.position.y
        } else {
            self.position.y + self.height
        }
    }
}
