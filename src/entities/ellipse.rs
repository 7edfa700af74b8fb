//! Ellipse entity

use crate::types::Vector3;

/// An ellipse or elliptical arc
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Center (groups 10/20/30)
    pub center: Vector3,
    /// Endpoint of the major axis relative to the center (groups 11/21/31)
    pub major_axis: Vector3,
    /// Minor to major axis ratio (group 40)
    pub ratio: f64,
    /// Start parameter in radians (group 41)
    pub start_parameter: f64,
    /// End parameter in radians (group 42)
    pub end_parameter: f64,
}

impl Ellipse {
    pub fn major_axis_length(&self) -> f64 {
        self.major_axis.length()
    }

    pub fn minor_axis_length(&self) -> f64 {
        self.major_axis.length() * self.ratio
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse {
            center: Vector3::ZERO,
            major_axis: Vector3::UNIT_X,
            ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: std::f64::consts::TAU,
        }
    }
}
