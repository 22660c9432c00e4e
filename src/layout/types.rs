//! Core types for the ring layout engine

/// A point in 3D scene space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The scene origin
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar distance to another point, ignoring height
    pub fn planar_distance(&self, other: &Point3) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Heading (radians, counter-clockwise from +X) of this point seen from `center`
    pub fn heading_from(&self, center: &Point3) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Z-axis rotation produced for a placed object
///
/// Face-center placements overwrite the object's rotation, every other
/// placement nudges it by the configured per-object increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZRotation {
    /// Replace the current z-rotation (radians)
    Absolute(f64),
    /// Add to the current z-rotation (radians)
    Relative(f64),
}

impl ZRotation {
    /// Final z-rotation for an object whose current rotation is `current`
    pub fn resolve(&self, current: f64) -> f64 {
        match *self {
            ZRotation::Absolute(angle) => angle,
            ZRotation::Relative(delta) => current + delta,
        }
    }

    /// The raw angle carried by this rotation, in radians
    pub fn radians(&self) -> f64 {
        match *self {
            ZRotation::Absolute(angle) | ZRotation::Relative(angle) => angle,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, ZRotation::Absolute(_))
    }
}

/// Anything the engine can place. Only the display name is ever read.
pub trait ObjectHandle {
    fn name(&self) -> &str;
}

impl ObjectHandle for String {
    fn name(&self) -> &str {
        self
    }
}

impl ObjectHandle for &str {
    fn name(&self) -> &str {
        self
    }
}

/// A single computed transform, paired with the object it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<O> {
    pub object: O,
    pub position: Point3,
    pub rotation: ZRotation,
    /// Ring this object landed on (0-based)
    pub ring: usize,
    /// Slot index within the ring's pattern period
    pub slot: usize,
}

impl<O: ObjectHandle> Placement<O> {
    pub fn name(&self) -> &str {
        self.object.name()
    }
}
