use crate::models::{Axis3D, BoxId, BoxState, Orientation3D, TickMode};

/// Indices into `Aabb::corners` forming the twelve edges of a box.
const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Read-only copy of the parts of a box a renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSnapshot {
    pub id: BoxId,
    pub position: Axis3D,
    pub orientation: Orientation3D,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub tick_mode: TickMode,
}

impl BoxSnapshot {
    pub fn from_state(id: BoxId, state: &BoxState) -> Self {
        BoxSnapshot {
            id,
            position: state.position,
            orientation: state.orientation,
            width: state.width,
            height: state.height,
            depth: state.depth,
            tick_mode: state.tick_mode,
        }
    }

    /// Point the wireframe renderer positions the cube at: centred on x and z,
    /// left at the minimum corner on y.
    pub fn anchor(&self) -> Axis3D {
        Axis3D::new(
            self.position.x + self.width / 2.0,
            self.position.y,
            self.position.z + self.depth / 2.0,
        )
    }

    pub fn centroid(&self) -> Axis3D {
        Axis3D::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
            self.position.z + self.depth / 2.0,
        )
    }

    /// The twelve edges of the box, rotated by its orientation about its centroid.
    ///
    /// Rotations are applied about x, then y, then z.
    ///
    /// # Example
    /// ```
    /// use rs_box_physics::PhysicsWorld;
    ///
    /// let mut world = PhysicsWorld::new();
    /// world.create_box((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), 10.0, 10.0, 10.0);
    /// let snapshot = &world.snapshots()[0];
    /// let edges = snapshot.wireframe_edges();
    /// assert_eq!(edges.len(), 12);
    /// assert_eq!(edges[0].0.x, 0.0);
    /// assert_eq!(edges[0].1.x, 10.0);
    /// ```
    pub fn wireframe_edges(&self) -> [(Axis3D, Axis3D); 12] {
        let centroid = self.centroid();
        let corners = crate::models::Aabb::from_corner(self.position, self.width, self.height, self.depth)
            .corners()
            .map(|corner| rotate_about(corner, centroid, &self.orientation));
        EDGES.map(|(from, to)| (corners[from], corners[to]))
    }
}

fn rotate_about(point: Axis3D, pivot: Axis3D, orientation: &Orientation3D) -> Axis3D {
    let (mut x, mut y, mut z) = (point.x - pivot.x, point.y - pivot.y, point.z - pivot.z);

    let (sin, cos) = orientation.x.to_radians().sin_cos();
    (y, z) = (y * cos - z * sin, y * sin + z * cos);

    let (sin, cos) = orientation.y.to_radians().sin_cos();
    (x, z) = (x * cos + z * sin, -x * sin + z * cos);

    let (sin, cos) = orientation.z.to_radians().sin_cos();
    (x, y) = (x * cos - y * sin, x * sin + y * cos);

    Axis3D::new(x + pivot.x, y + pivot.y, z + pivot.z)
}
