//! Arc entity

use crate::types::Vector3;

/// A circular arc, counter-clockwise from start to end angle
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Center (groups 10/20/30)
    pub center: Vector3,
    /// Radius (group 40)
    pub radius: f64,
    /// Start angle in degrees (group 50)
    pub start_angle: f64,
    /// End angle in degrees (group 51)
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Swept angle in degrees, always in `[0, 360)`
    pub fn sweep_angle(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(360.0)
    }
}

impl Default for Arc {
    fn default() -> Self {
        Arc::new(Vector3::ZERO, 1.0, 0.0, 90.0)
    }
}
