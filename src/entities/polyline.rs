//! Polyline assembled from a POLYLINE/LWPOLYLINE header and its vertices

use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (group 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PolylineFlags: u16 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const LINETYPE_CONTINUOUS = 128;
    }
}

/// One polyline vertex
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Location (groups 10/20/30)
    pub location: Vector3,
    /// Bulge of the segment that starts here (group 42); 0 is straight,
    /// 1 is a semicircle
    pub bulge: f64,
}

impl Vertex {
    pub fn new(location: Vector3) -> Self {
        Vertex {
            location,
            bulge: 0.0,
        }
    }

    pub fn with_bulge(location: Vector3, bulge: f64) -> Self {
        Vertex { location, bulge }
    }
}

/// A polyline with its declared vertex count.
///
/// A polyline that was interrupted by a new polyline header or by the end of
/// the stream is kept with the vertices it got; `is_complete` tells the two
/// apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    /// Number of vertices the header announced
    pub declared_vertex_count: usize,
    pub flags: PolylineFlags,
    /// Elevation (group 38, or 30 on heavy polylines)
    pub elevation: f64,
    /// Vertices in stream order
    pub vertices: Vec<Vertex>,
}

impl Polyline {
    pub fn new(declared_vertex_count: usize, flags: PolylineFlags, elevation: f64) -> Self {
        Polyline {
            declared_vertex_count,
            flags,
            elevation,
            vertices: Vec::new(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    pub fn is_complete(&self) -> bool {
        self.vertices.len() == self.declared_vertex_count
    }

    /// Vertices still expected before the polyline is complete
    pub fn missing_vertices(&self) -> usize {
        self.declared_vertex_count.saturating_sub(self.vertices.len())
    }
}
