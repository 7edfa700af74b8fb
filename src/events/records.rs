//! Record payloads that are not themselves finished entities

use crate::entities::{PolylineFlags, SplineFlags};
use crate::types::{Color, Vector3};

/// Header of a polyline: how many vertices follow and how to read them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolylineBegin {
    pub vertex_count: usize,
    pub flags: PolylineFlags,
    pub elevation: f64,
}

impl PolylineBegin {
    pub fn new(vertex_count: usize) -> Self {
        PolylineBegin {
            vertex_count,
            ..Self::default()
        }
    }
}

/// Header of a spline: degree and the three item counts that follow
#[derive(Debug, Clone, PartialEq)]
pub struct SplineBegin {
    pub degree: u32,
    pub knot_count: usize,
    pub control_point_count: usize,
    pub fit_point_count: usize,
    pub flags: SplineFlags,
}

impl SplineBegin {
    pub fn new(
        degree: u32,
        knot_count: usize,
        control_point_count: usize,
        fit_point_count: usize,
    ) -> Self {
        SplineBegin {
            degree,
            knot_count,
            control_point_count,
            fit_point_count,
            flags: SplineFlags::empty(),
        }
    }
}

/// LAYER table entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerRecord {
    pub name: String,
    /// 1 = frozen, 4 = locked (group 70)
    pub flags: i16,
    /// Negative index in the file means the layer is off
    pub color: Color,
    pub off: bool,
    pub line_type: String,
}

/// LTYPE table entry; its dashes follow as `add_linetype_dash` calls
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinetypeRecord {
    pub name: String,
    pub description: String,
    pub flags: i16,
    /// Number of dash elements (group 73)
    pub dash_count: usize,
    /// Total pattern length (group 40)
    pub pattern_length: f64,
}

/// STYLE table entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleRecord {
    pub name: String,
    pub flags: i16,
    /// Fixed height, 0 when not fixed (group 40)
    pub fixed_height: f64,
    pub width_factor: f64,
    pub oblique_angle: f64,
    pub primary_font_file: String,
    pub big_font_file: String,
}

/// BLOCK header; entities of the block follow until `end_block`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockRecord {
    pub name: String,
    pub flags: i16,
    pub base_point: Vector3,
}

/// Dimension variant, from group 70 masked with 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionKind {
    /// Rotated, horizontal or vertical
    #[default]
    Linear,
    Aligned,
    Angular,
    Diametric,
    Radial,
    Angular3Point,
    Ordinate,
}

impl From<i16> for DimensionKind {
    fn from(value: i16) -> Self {
        match value & 7 {
            1 => Self::Aligned,
            2 => Self::Angular,
            3 => Self::Diametric,
            4 => Self::Radial,
            5 => Self::Angular3Point,
            6 => Self::Ordinate,
            _ => Self::Linear,
        }
    }
}

/// DIMENSION entity common data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DimensionRecord {
    pub kind: DimensionKind,
    /// Groups 10/20/30
    pub definition_point: Vector3,
    /// Groups 11/21/31
    pub text_midpoint: Vector3,
    /// Explicit text, empty for the measured value (group 1)
    pub text: String,
    /// Dimension style name (group 3)
    pub style: String,
    /// Rotation of linear dimensions in degrees (group 50)
    pub angle: f64,
}

/// LEADER header; vertices follow as `add_leader_vertex` calls
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaderRecord {
    pub style: String,
    pub arrowhead: bool,
    /// 0 = straight segments, 1 = spline (group 72)
    pub path_type: i16,
    pub vertex_count: usize,
}

/// One boundary path of a hatch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HatchLoopRecord {
    /// Boundary path type flags (group 92); bit 2 marks a polyline path
    pub path_type: i32,
    /// Edges, or vertices for polyline paths (group 93)
    pub edge_count: usize,
}

/// Edge type of a non-polyline hatch boundary path (group 72)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatchEdgeType {
    Line,
    CircularArc,
    EllipticArc,
    Spline,
    Unknown(i16),
}

impl From<i16> for HatchEdgeType {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Line,
            2 => Self::CircularArc,
            3 => Self::EllipticArc,
            4 => Self::Spline,
            other => Self::Unknown(other),
        }
    }
}

/// IMAGEDEF object linking an image handle to a file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageDefRecord {
    pub handle: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DictionaryRecord {
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DictionaryEntryRecord {
    pub name: String,
    pub handle: String,
}

/// ARCALIGNEDTEXT entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArcAlignedTextRecord {
    pub text: String,
    pub font_name: String,
    pub center: Vector3,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// 3DFACE entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Face3dRecord {
    pub corners: [Vector3; 4],
    /// Invisible edge bits (group 70)
    pub invisible_edges: i16,
}

/// A typed value inside an XRECORD or extended data
#[derive(Debug, Clone, PartialEq)]
pub enum XValue {
    String(String),
    Real(f64),
    Int(i64),
    Bool(bool),
}

/// A HEADER variable value
#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    String(String),
    Int(i64),
    Double(f64),
    Vector(Vector3),
}
