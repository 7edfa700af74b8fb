//! Spline assembled from a SPLINE header, its knots, control and fit points

use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Spline flags (group 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SplineFlags: u16 {
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

/// A weighted control point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Location (groups 10/20/30)
    pub location: Vector3,
    /// Weight (group 41), 1.0 when the spline is not rational
    pub weight: f64,
}

impl ControlPoint {
    pub fn new(location: Vector3) -> Self {
        ControlPoint {
            location,
            weight: 1.0,
        }
    }

    pub fn weighted(location: Vector3, weight: f64) -> Self {
        ControlPoint { location, weight }
    }
}

/// A NURBS curve.
///
/// Only complete splines ever reach the output: all three sequences hold
/// exactly their declared number of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    /// Degree (group 71)
    pub degree: u32,
    pub flags: SplineFlags,
    /// Declared knot count (group 72)
    pub declared_knot_count: usize,
    /// Declared control point count (group 73)
    pub declared_control_point_count: usize,
    /// Declared fit point count (group 74)
    pub declared_fit_point_count: usize,
    pub knots: Vec<f64>,
    pub control_points: Vec<ControlPoint>,
    pub fit_points: Vec<Vector3>,
}

impl Spline {
    pub fn new(
        degree: u32,
        flags: SplineFlags,
        knot_count: usize,
        control_point_count: usize,
        fit_point_count: usize,
    ) -> Self {
        Spline {
            degree,
            flags,
            declared_knot_count: knot_count,
            declared_control_point_count: control_point_count,
            declared_fit_point_count: fit_point_count,
            knots: Vec::new(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
        }
    }

    pub fn is_rational(&self) -> bool {
        self.flags.contains(SplineFlags::RATIONAL)
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(SplineFlags::CLOSED)
    }

    /// All three sequences at their declared counts
    pub fn is_complete(&self) -> bool {
        self.knots.len() == self.declared_knot_count
            && self.control_points.len() == self.declared_control_point_count
            && self.fit_points.len() == self.declared_fit_point_count
    }
}

impl Default for Spline {
    fn default() -> Self {
        Spline::new(3, SplineFlags::empty(), 0, 0, 0)
    }
}
