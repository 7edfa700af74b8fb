//! Filled quadrilaterals: SOLID and TRACE

use crate::types::Vector3;

/// Four corners and a thickness.
///
/// DXF stores the corners in zig-zag order (1, 2, 4, 3 around the outline);
/// a triangle repeats the third corner as the fourth.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solid {
    /// Corners (groups 10..13 / 20..23 / 30..33)
    pub corners: [Vector3; 4],
    /// Extrusion thickness (group 39)
    pub thickness: f64,
}

/// TRACE records carry exactly the SOLID layout
pub type Trace = Solid;

impl Solid {
    pub fn new(corners: [Vector3; 4]) -> Self {
        Solid {
            corners,
            thickness: 0.0,
        }
    }

    pub fn is_triangle(&self) -> bool {
        self.corners[2] == self.corners[3]
    }
}
