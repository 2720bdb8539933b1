pub trait FromCoordinates <T> {
    /// Creates a new instance of the struct from the given coordinates.
    /// # Arguments
    /// * `position` - The coordinates to create the struct from.
    /// # Returns
    /// A new instance of the struct.
    /// # Example
    /// ```
    /// use rs_box_physics::models::Axis3D;
    /// use rs_box_physics::models::FromCoordinates;
    ///
    /// let axis = Axis3D::from_coord((1.0, 2.0, 3.0));
    /// assert_eq!(axis.x, 1.0);
    /// assert_eq!(axis.z, 3.0);
    /// ```
    fn from_coord(position: T) -> Self;
}

pub trait ToCoordinates <T> {
    /// Converts the struct to a tuple of coordinates.
    fn to_coord(&self) -> T;
}

/// One of the three world axes. Collision resolution works along exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

macro_rules! impl_vector_3d {
    ($name:ident) => {
        impl $name {
            pub fn new(x: f64, y: f64, z: f64) -> Self {
                $name { x, y, z }
            }

            pub fn zero() -> Self {
                $name { x: 0.0, y: 0.0, z: 0.0 }
            }

            /// Returns the component along `axis`.
            pub fn get(&self, axis: Axis) -> f64 {
                match axis {
                    Axis::X => self.x,
                    Axis::Y => self.y,
                    Axis::Z => self.z,
                }
            }

            /// Returns a mutable reference to the component along `axis`.
            pub fn get_mut(&mut self, axis: Axis) -> &mut f64 {
                match axis {
                    Axis::X => &mut self.x,
                    Axis::Y => &mut self.y,
                    Axis::Z => &mut self.z,
                }
            }

            pub fn is_finite(&self) -> bool {
                self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
            }
        }

        impl FromCoordinates<(f64, f64, f64)> for $name {
            fn from_coord(position: (f64, f64, f64)) -> Self {
                $name {
                    x: position.0,
                    y: position.1,
                    z: position.2,
                }
            }
        }

        impl ToCoordinates<(f64, f64, f64)> for $name {
            fn to_coord(&self) -> (f64, f64, f64) {
                (self.x, self.y, self.z)
            }
        }
    };
}

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axis3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A per-tick rate of change, linear or angular.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Rotation about each world axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl_vector_3d!(Axis3D);
impl_vector_3d!(Velocity3D);
impl_vector_3d!(Orientation3D);

impl Velocity3D {
    /// Divides every component by `divisor`.
    pub fn damp(&mut self, divisor: f64) {
        self.x /= divisor;
        self.y /= divisor;
        self.z /= divisor;
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Axis3D {
    pub fn translate(&mut self, velocity: &Velocity3D) {
        self.x += velocity.x;
        self.y += velocity.y;
        self.z += velocity.z;
    }
}
