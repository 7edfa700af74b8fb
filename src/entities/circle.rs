//! Circle entity

use crate::types::Vector3;

/// A full circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center (groups 10/20/30)
    pub center: Vector3,
    /// Radius (group 40)
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Circle { center, radius }
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

impl Default for Circle {
    fn default() -> Self {
        Circle::new(Vector3::ZERO, 1.0)
    }
}
