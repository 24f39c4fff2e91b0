//! Point types carried by drawing records

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D point, `{"x": .., "y": ..}` in the input document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new 2D point
    pub const fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Origin
    pub const ZERO: Point2 = Point2::new(0.0, 0.0);
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Point2::new(x, y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 3D point, `{"x": .., "y": .., "z": ..}` in the input document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a new 3D point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Origin
    pub const ZERO: Point3 = Point3::new(0.0, 0.0, 0.0);

    /// Drop the Z coordinate
    pub fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
