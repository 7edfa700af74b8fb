//! Line entity

use crate::types::Vector3;

/// A line segment defined by two endpoints
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Start point (groups 10/20/30)
    pub start: Vector3,
    /// End point (groups 11/21/31)
    pub end: Vector3,
}

impl Line {
    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line { start, end }
    }

    /// Create a new line from coordinates
    pub fn from_coords(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Line::from_points(Vector3::new(x1, y1, z1), Vector3::new(x2, y2, z2))
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}
