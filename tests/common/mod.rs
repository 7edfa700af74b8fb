//! Shared helpers for the integration tests.
//!
//! Event builders for feeding the assembler directly, and DXF text helpers
//! for going through the reader.

#![allow(dead_code)]

use dxf_assembler::entities::{Circle, ControlPoint, Line, Point, Vertex};
use dxf_assembler::io::dxf::{DxfReader, DxfReaderConfiguration};
use dxf_assembler::{
    Attributes, Drawing, DrawingEvent, EntityAssembler, PolylineBegin, SplineBegin, Vector3,
};
use std::io::Cursor;

// ===========================================================================
// Event builders
// ===========================================================================

pub fn attributes(layer: &str) -> DrawingEvent {
    DrawingEvent::SetAttributes(Attributes::with_layer(layer))
}

pub fn line(x: f64) -> DrawingEvent {
    DrawingEvent::Line(Line::from_coords(x, 0.0, 0.0, x, 1.0, 0.0))
}

pub fn point(x: f64) -> DrawingEvent {
    DrawingEvent::Point(Point::from_coords(x, 0.0, 0.0))
}

pub fn circle(radius: f64) -> DrawingEvent {
    DrawingEvent::Circle(Circle::new(Vector3::ZERO, radius))
}

pub fn polyline(vertex_count: usize) -> DrawingEvent {
    DrawingEvent::PolylineBegin(PolylineBegin::new(vertex_count))
}

pub fn vertex(x: f64, y: f64) -> DrawingEvent {
    DrawingEvent::Vertex(Vertex::new(Vector3::new(x, y, 0.0)))
}

/// Spline header with counts in (knots, control points, fit points) order
pub fn spline(knots: usize, control_points: usize, fit_points: usize) -> DrawingEvent {
    DrawingEvent::SplineBegin(SplineBegin::new(3, knots, control_points, fit_points))
}

pub fn knot(value: f64) -> DrawingEvent {
    DrawingEvent::Knot(value)
}

pub fn control_point(x: f64) -> DrawingEvent {
    DrawingEvent::ControlPoint(ControlPoint::new(Vector3::new(x, 0.0, 0.0)))
}

pub fn fit_point(x: f64) -> DrawingEvent {
    DrawingEvent::FitPoint(Vector3::new(x, 0.0, 0.0))
}

/// Feed the events, then finish the stream
pub fn assemble(events: impl IntoIterator<Item = DrawingEvent>) -> Drawing {
    let mut asm = EntityAssembler::new();
    asm.feed(events);
    asm.feed([DrawingEvent::EndOfStream]);
    asm.finish()
}

// ===========================================================================
// DXF text helpers
// ===========================================================================

/// Wrap entity records in a minimal ENTITIES-only file
pub fn entities_dxf(body: &str) -> String {
    format!("0\nSECTION\n2\nENTITIES\n{body}0\nENDSEC\n0\nEOF\n")
}

pub fn read_dxf(text: &str) -> Drawing {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))
        .and_then(|r| r.read())
        .expect("inline DXF should read")
}

pub fn read_dxf_with(text: &str, config: DxfReaderConfiguration) -> dxf_assembler::Result<Drawing> {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))?
        .with_configuration(config)
        .read()
}
