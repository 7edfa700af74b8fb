//! Point entity

use crate::types::Vector3;

/// A single point
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    /// Location (groups 10/20/30)
    pub location: Vector3,
}

impl Point {
    pub fn new(location: Vector3) -> Self {
        Point { location }
    }

    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Point::new(Vector3::new(x, y, z))
    }
}
