//! Construction line (infinite in both directions)

use crate::types::Vector3;

/// An XLINE: a base point and a direction, unbounded both ways
#[derive(Debug, Clone, PartialEq)]
pub struct XLine {
    /// Base point (groups 10/20/30)
    pub base_point: Vector3,
    /// Direction vector (groups 11/21/31)
    pub direction: Vector3,
}

impl XLine {
    pub fn new(base_point: Vector3, direction: Vector3) -> Self {
        XLine { base_point, direction }
    }
}

impl Default for XLine {
    fn default() -> Self {
        XLine::new(Vector3::ZERO, Vector3::UNIT_X)
    }
}
