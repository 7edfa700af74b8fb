//! The drawing event surface
//!
//! A scanner walks a drawing and calls one [`EventReceiver`] operation per
//! record, strictly in file order. Operations fall into four groups:
//!
//! - control: [`set_attributes`](EventReceiver::set_attributes) and
//!   [`end_of_stream`](EventReceiver::end_of_stream)
//! - simple entities, each a complete entity on its own
//! - composite pieces: polyline and spline headers and the items that follow
//! - records that carry no entity (tables, dimensions, extended data, ...)
//!
//! Every operation defaults to a no-op so a receiver only overrides what it
//! uses. [`DrawingEvent`] mirrors the operation set as data; its
//! [`dispatch`](DrawingEvent::dispatch) is an exhaustive match.

mod records;

pub use records::*;

use crate::attributes::Attributes;
use crate::entities::{
    Arc, AttributeDefinition, Circle, ControlPoint, Ellipse, Hatch, Image, Insert, Line, MText,
    Point, Ray, Solid, Text, Trace, Vertex, XLine,
};
use crate::types::Vector3;

/// Callback surface invoked once per drawing record.
///
/// Implementations must not fail: every operation returns nothing and
/// malformed sequences are the receiver's to tolerate.
#[allow(unused_variables)]
pub trait EventReceiver {
    /// Replace the current presentation attributes. Issued before each
    /// entity record.
    fn set_attributes(&mut self, attributes: Attributes) {}

    fn add_point(&mut self, point: Point) {}
    fn add_line(&mut self, line: Line) {}
    fn add_arc(&mut self, arc: Arc) {}
    fn add_circle(&mut self, circle: Circle) {}
    fn add_ellipse(&mut self, ellipse: Ellipse) {}
    fn add_text(&mut self, text: Text) {}
    fn add_mtext(&mut self, mtext: MText) {}
    fn add_insert(&mut self, insert: Insert) {}
    fn add_solid(&mut self, solid: Solid) {}
    fn add_trace(&mut self, trace: Trace) {}
    fn add_xline(&mut self, xline: XLine) {}
    fn add_ray(&mut self, ray: Ray) {}
    fn add_attribute_definition(&mut self, definition: AttributeDefinition) {}
    fn add_hatch(&mut self, hatch: Hatch) {}
    fn add_image(&mut self, image: Image) {}

    /// Polyline header; `vertex_count` vertices are expected to follow.
    fn add_polyline(&mut self, polyline: PolylineBegin) {}
    fn add_vertex(&mut self, vertex: Vertex) {}
    /// Spline header; knots, control points and fit points follow in any
    /// interleaving.
    fn add_spline(&mut self, spline: SplineBegin) {}
    fn add_control_point(&mut self, control_point: ControlPoint) {}
    fn add_knot(&mut self, knot: f64) {}
    fn add_fit_point(&mut self, fit_point: Vector3) {}

    fn add_layer(&mut self, layer: LayerRecord) {}
    fn add_linetype(&mut self, linetype: LinetypeRecord) {}
    fn add_linetype_dash(&mut self, length: f64) {}
    fn add_text_style(&mut self, style: StyleRecord) {}
    fn add_block(&mut self, block: BlockRecord) {}
    fn end_block(&mut self) {}
    fn add_dimension(&mut self, dimension: DimensionRecord) {}
    fn add_leader(&mut self, leader: LeaderRecord) {}
    fn add_leader_vertex(&mut self, vertex: Vector3) {}
    fn add_hatch_loop(&mut self, hatch_loop: HatchLoopRecord) {}
    fn add_hatch_edge(&mut self, edge: HatchEdgeType) {}
    fn link_image(&mut self, definition: ImageDefRecord) {}
    fn add_dictionary(&mut self, dictionary: DictionaryRecord) {}
    fn add_dictionary_entry(&mut self, entry: DictionaryEntryRecord) {}
    fn add_xrecord(&mut self, handle: String) {}
    fn add_xrecord_value(&mut self, code: i32, value: XValue) {}
    fn add_xdata_app(&mut self, app_id: String) {}
    fn add_xdata_value(&mut self, code: i32, value: XValue) {}
    fn set_variable(&mut self, name: String, value: VariableValue, code: i32) {}
    fn add_comment(&mut self, comment: String) {}
    /// SEQEND after heavy polyline vertices or block attributes
    fn end_sequence(&mut self) {}
    fn add_arc_aligned_text(&mut self, text: ArcAlignedTextRecord) {}
    fn add_mtext_chunk(&mut self, chunk: String) {}
    fn add_3d_face(&mut self, face: Face3dRecord) {}

    /// No further records will be delivered.
    fn end_of_stream(&mut self) {}
}

/// How a receiver is expected to treat an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    Control,
    SimpleEntity,
    Composite,
    Ignored,
}

/// One drawing record as a value.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingEvent {
    SetAttributes(Attributes),

    Point(Point),
    Line(Line),
    Arc(Arc),
    Circle(Circle),
    Ellipse(Ellipse),
    Text(Text),
    MText(MText),
    Insert(Insert),
    Solid(Solid),
    Trace(Trace),
    XLine(XLine),
    Ray(Ray),
    AttributeDefinition(AttributeDefinition),
    Hatch(Hatch),
    Image(Image),

    PolylineBegin(PolylineBegin),
    Vertex(Vertex),
    SplineBegin(SplineBegin),
    ControlPoint(ControlPoint),
    Knot(f64),
    FitPoint(Vector3),

    Layer(LayerRecord),
    Linetype(LinetypeRecord),
    LinetypeDash(f64),
    TextStyle(StyleRecord),
    BlockBegin(BlockRecord),
    BlockEnd,
    Dimension(DimensionRecord),
    Leader(LeaderRecord),
    LeaderVertex(Vector3),
    HatchLoop(HatchLoopRecord),
    HatchEdge(HatchEdgeType),
    ImageLink(ImageDefRecord),
    Dictionary(DictionaryRecord),
    DictionaryEntry(DictionaryEntryRecord),
    XRecord(String),
    XRecordValue(i32, XValue),
    XDataApp(String),
    XDataValue(i32, XValue),
    Variable(String, VariableValue, i32),
    Comment(String),
    SequenceEnd,
    ArcAlignedText(ArcAlignedTextRecord),
    MTextChunk(String),
    Face3d(Face3dRecord),

    EndOfStream,
}

impl DrawingEvent {
    /// Deliver this event to the matching receiver operation
    pub fn dispatch<R: EventReceiver + ?Sized>(self, receiver: &mut R) {
        match self {
            DrawingEvent::SetAttributes(a) => receiver.set_attributes(a),

            DrawingEvent::Point(e) => receiver.add_point(e),
            DrawingEvent::Line(e) => receiver.add_line(e),
            DrawingEvent::Arc(e) => receiver.add_arc(e),
            DrawingEvent::Circle(e) => receiver.add_circle(e),
            DrawingEvent::Ellipse(e) => receiver.add_ellipse(e),
            DrawingEvent::Text(e) => receiver.add_text(e),
            DrawingEvent::MText(e) => receiver.add_mtext(e),
            DrawingEvent::Insert(e) => receiver.add_insert(e),
            DrawingEvent::Solid(e) => receiver.add_solid(e),
            DrawingEvent::Trace(e) => receiver.add_trace(e),
            DrawingEvent::XLine(e) => receiver.add_xline(e),
            DrawingEvent::Ray(e) => receiver.add_ray(e),
            DrawingEvent::AttributeDefinition(e) => receiver.add_attribute_definition(e),
            DrawingEvent::Hatch(e) => receiver.add_hatch(e),
            DrawingEvent::Image(e) => receiver.add_image(e),

            DrawingEvent::PolylineBegin(b) => receiver.add_polyline(b),
            DrawingEvent::Vertex(v) => receiver.add_vertex(v),
            DrawingEvent::SplineBegin(b) => receiver.add_spline(b),
            DrawingEvent::ControlPoint(c) => receiver.add_control_point(c),
            DrawingEvent::Knot(k) => receiver.add_knot(k),
            DrawingEvent::FitPoint(p) => receiver.add_fit_point(p),

            DrawingEvent::Layer(r) => receiver.add_layer(r),
            DrawingEvent::Linetype(r) => receiver.add_linetype(r),
            DrawingEvent::LinetypeDash(len) => receiver.add_linetype_dash(len),
            DrawingEvent::TextStyle(r) => receiver.add_text_style(r),
            DrawingEvent::BlockBegin(r) => receiver.add_block(r),
            DrawingEvent::BlockEnd => receiver.end_block(),
            DrawingEvent::Dimension(r) => receiver.add_dimension(r),
            DrawingEvent::Leader(r) => receiver.add_leader(r),
            DrawingEvent::LeaderVertex(v) => receiver.add_leader_vertex(v),
            DrawingEvent::HatchLoop(r) => receiver.add_hatch_loop(r),
            DrawingEvent::HatchEdge(t) => receiver.add_hatch_edge(t),
            DrawingEvent::ImageLink(r) => receiver.link_image(r),
            DrawingEvent::Dictionary(r) => receiver.add_dictionary(r),
            DrawingEvent::DictionaryEntry(r) => receiver.add_dictionary_entry(r),
            DrawingEvent::XRecord(h) => receiver.add_xrecord(h),
            DrawingEvent::XRecordValue(code, v) => receiver.add_xrecord_value(code, v),
            DrawingEvent::XDataApp(app) => receiver.add_xdata_app(app),
            DrawingEvent::XDataValue(code, v) => receiver.add_xdata_value(code, v),
            DrawingEvent::Variable(name, v, code) => receiver.set_variable(name, v, code),
            DrawingEvent::Comment(c) => receiver.add_comment(c),
            DrawingEvent::SequenceEnd => receiver.end_sequence(),
            DrawingEvent::ArcAlignedText(r) => receiver.add_arc_aligned_text(r),
            DrawingEvent::MTextChunk(s) => receiver.add_mtext_chunk(s),
            DrawingEvent::Face3d(r) => receiver.add_3d_face(r),

            DrawingEvent::EndOfStream => receiver.end_of_stream(),
        }
    }

    pub fn class(&self) -> EventClass {
        match self {
            DrawingEvent::SetAttributes(_) | DrawingEvent::EndOfStream => EventClass::Control,

            DrawingEvent::Point(_)
            | DrawingEvent::Line(_)
            | DrawingEvent::Arc(_)
            | DrawingEvent::Circle(_)
            | DrawingEvent::Ellipse(_)
            | DrawingEvent::Text(_)
            | DrawingEvent::MText(_)
            | DrawingEvent::Insert(_)
            | DrawingEvent::Solid(_)
            | DrawingEvent::Trace(_)
            | DrawingEvent::XLine(_)
            | DrawingEvent::Ray(_)
            | DrawingEvent::AttributeDefinition(_)
            | DrawingEvent::Hatch(_)
            | DrawingEvent::Image(_) => EventClass::SimpleEntity,

            DrawingEvent::PolylineBegin(_)
            | DrawingEvent::Vertex(_)
            | DrawingEvent::SplineBegin(_)
            | DrawingEvent::ControlPoint(_)
            | DrawingEvent::Knot(_)
            | DrawingEvent::FitPoint(_) => EventClass::Composite,

            _ => EventClass::Ignored,
        }
    }
}
