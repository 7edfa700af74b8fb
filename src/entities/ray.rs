//! Ray (semi-infinite line)

use crate::types::Vector3;

/// A RAY: starts at the base point and extends along the direction
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    /// Start point (groups 10/20/30)
    pub base_point: Vector3,
    /// Direction vector (groups 11/21/31)
    pub direction: Vector3,
}

impl Ray {
    pub fn new(base_point: Vector3, direction: Vector3) -> Self {
        Ray { base_point, direction }
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Vector3::ZERO, Vector3::UNIT_X)
    }
}
