//! Folding an event stream into finished entities
//!
//! [`EntityAssembler`] implements [`EventReceiver`]. Simple entity records
//! are wrapped with a copy of the current attributes and appended at once.
//! Polylines and splines are collected in two independent single-slot
//! accumulators and appended when they are complete:
//!
//! - a polyline is complete when it has as many vertices as its header
//!   declared. A new polyline header, or the end of the stream, appends a
//!   short polyline as-is.
//! - a spline is complete when its knots, control points and fit points all
//!   reach their declared counts. A new spline header, or the end of the
//!   stream, drops a short spline with a notification; partial splines never
//!   reach the output.
//!
//! Records that belong to no pending composite are discarded with a
//! [`NotificationType::ProtocolViolation`].

mod pending;

use pending::{Full, PendingPolyline, PendingSpline};

use crate::attributes::Attributes;
use crate::drawing::Drawing;
use crate::entities::{
    Arc, AttributeDefinition, Circle, ControlPoint, Ellipse, Entity, EntityType, Hatch, Image,
    Insert, Line, MText, Point, Ray, Solid, Text, Trace, Vertex, XLine,
};
use crate::events::*;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::Vector3;
use tracing::{error, trace, warn};

/// Configuration for the assembler.
#[derive(Debug, Clone, Default)]
pub struct AssemblerConfiguration {
    /// Record every accepted-but-unused record (layers, dimensions, xdata,
    /// ...) as a [`NotificationType::Ignored`] notification.
    ///
    /// Default: `false`.
    pub record_ignored: bool,
}

/// Builds the entity collection from drawing events.
///
/// One assembler serves one stream. Feed it through the [`EventReceiver`]
/// operations (or [`feed`](Self::feed)), then call [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct EntityAssembler {
    config: AssemblerConfiguration,
    attributes: Attributes,
    entities: Vec<Entity>,
    pending_polyline: Option<PendingPolyline>,
    pending_spline: Option<PendingSpline>,
    notifications: NotificationCollection,
}

impl EntityAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(config: AssemblerConfiguration) -> Self {
        EntityAssembler {
            config,
            ..Self::default()
        }
    }

    /// The attributes the next entity will be created with
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Entities finished so far, in completion order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn has_pending_polyline(&self) -> bool {
        self.pending_polyline.is_some()
    }

    pub fn has_pending_spline(&self) -> bool {
        self.pending_spline.is_some()
    }

    /// Dispatch a sequence of events in order
    pub fn feed<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = DrawingEvent>,
    {
        for event in events {
            event.dispatch(self);
        }
    }

    /// Append the pending polyline, complete or not.
    ///
    /// Does nothing when no polyline is pending.
    pub fn finalize_polyline(&mut self) {
        let Some(pending) = self.pending_polyline.take() else {
            return;
        };
        if !pending.is_complete() {
            let progress = pending.progress();
            self.notify(
                NotificationType::Incomplete,
                "POLYLINE",
                format!("polyline finalized with {progress}"),
            );
        }
        self.entities.push(pending.into_entity());
    }

    /// Append the pending spline if it is complete.
    ///
    /// An incomplete spline stays pending and an
    /// [`Incomplete`](NotificationType::Incomplete) notification is recorded.
    /// Does nothing when no spline is pending. Returns whether a spline was
    /// appended.
    pub fn finalize_spline(&mut self) -> bool {
        match self.pending_spline.take() {
            None => false,
            Some(pending) if pending.is_complete() => {
                self.entities.push(pending.into_entity());
                true
            }
            Some(pending) => {
                let progress = pending.progress();
                self.pending_spline = Some(pending);
                self.notify(
                    NotificationType::Incomplete,
                    "SPLINE",
                    format!("spline not finalized, {progress}"),
                );
                false
            }
        }
    }

    /// Settle both accumulators as at the end of a stream.
    ///
    /// Safe to call repeatedly; later calls find nothing pending.
    pub fn flush(&mut self) {
        self.finalize_polyline();
        self.settle_spline("end of stream");
    }

    /// Record a read failure that was recovered from
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationType::Error, "STREAM", message);
    }

    /// Flush pending composites and hand over the result
    pub fn finish(mut self) -> Drawing {
        self.flush();
        Drawing::new(self.entities, self.notifications)
    }

    /// Finalize a complete pending spline or drop an incomplete one
    fn settle_spline(&mut self, cause: &str) {
        let Some(pending) = self.pending_spline.take() else {
            return;
        };
        if pending.is_complete() {
            self.entities.push(pending.into_entity());
        } else {
            let progress = pending.progress();
            self.notify(
                NotificationType::Incomplete,
                "SPLINE",
                format!("incomplete spline discarded at {cause}, {progress}"),
            );
        }
    }

    fn push_simple(&mut self, specific: EntityType) {
        self.entities
            .push(Entity::new(specific, self.attributes.clone()));
    }

    fn finish_spline_if_complete(&mut self) {
        if self.pending_spline.as_ref().is_some_and(|s| s.is_complete()) {
            self.finalize_spline();
        }
    }

    fn spline_item(
        &mut self,
        record: &'static str,
        push: impl FnOnce(&mut PendingSpline) -> Result<(), Full>,
    ) {
        let Some(pending) = self.pending_spline.as_mut() else {
            self.notify(
                NotificationType::ProtocolViolation,
                record,
                "no spline in progress, record discarded",
            );
            return;
        };
        match push(pending) {
            Ok(()) => self.finish_spline_if_complete(),
            Err(Full { declared }) => self.notify(
                NotificationType::ProtocolViolation,
                record,
                format!("spline already holds the {declared} declared, record discarded"),
            ),
        }
    }

    fn ignored(&mut self, record: &'static str) {
        if self.config.record_ignored {
            self.notify(NotificationType::Ignored, record, "accepted, no entity produced");
        }
    }

    fn notify(
        &mut self,
        notification_type: NotificationType,
        record: &'static str,
        message: impl Into<String>,
    ) {
        let message = message.into();
        match notification_type {
            NotificationType::ProtocolViolation | NotificationType::Incomplete => {
                warn!(record, kind = %notification_type, "{message}")
            }
            NotificationType::Ignored => trace!(record, "{message}"),
            NotificationType::Error => error!(record, "{message}"),
        }
        self.notifications.notify(notification_type, record, message);
    }
}

impl EventReceiver for EntityAssembler {
    fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    fn add_point(&mut self, point: Point) {
        self.push_simple(EntityType::Point(point));
    }

    fn add_line(&mut self, line: Line) {
        self.push_simple(EntityType::Line(line));
    }

    fn add_arc(&mut self, arc: Arc) {
        self.push_simple(EntityType::Arc(arc));
    }

    fn add_circle(&mut self, circle: Circle) {
        self.push_simple(EntityType::Circle(circle));
    }

    fn add_ellipse(&mut self, ellipse: Ellipse) {
        self.push_simple(EntityType::Ellipse(ellipse));
    }

    fn add_text(&mut self, text: Text) {
        self.push_simple(EntityType::Text(text));
    }

    fn add_mtext(&mut self, mtext: MText) {
        self.push_simple(EntityType::MText(mtext));
    }

    fn add_insert(&mut self, insert: Insert) {
        self.push_simple(EntityType::Insert(insert));
    }

    fn add_solid(&mut self, solid: Solid) {
        self.push_simple(EntityType::Solid(solid));
    }

    fn add_trace(&mut self, trace: Trace) {
        self.push_simple(EntityType::Trace(trace));
    }

    fn add_xline(&mut self, xline: XLine) {
        self.push_simple(EntityType::XLine(xline));
    }

    fn add_ray(&mut self, ray: Ray) {
        self.push_simple(EntityType::Ray(ray));
    }

    fn add_attribute_definition(&mut self, definition: AttributeDefinition) {
        self.push_simple(EntityType::AttributeDefinition(definition));
    }

    fn add_hatch(&mut self, hatch: Hatch) {
        self.push_simple(EntityType::Hatch(hatch));
    }

    fn add_image(&mut self, image: Image) {
        self.push_simple(EntityType::Image(image));
    }

    fn add_polyline(&mut self, polyline: PolylineBegin) {
        self.finalize_polyline();
        let pending = PendingPolyline::begin(polyline, self.attributes.clone());
        let empty = pending.is_complete();
        self.pending_polyline = Some(pending);
        if empty {
            self.finalize_polyline();
        }
    }

    fn add_vertex(&mut self, vertex: Vertex) {
        let Some(pending) = self.pending_polyline.as_mut() else {
            self.notify(
                NotificationType::ProtocolViolation,
                "VERTEX",
                "vertex without a polyline, discarded",
            );
            return;
        };
        let pushed = pending.push(vertex).map(|()| pending.is_complete());
        match pushed {
            Ok(true) => self.finalize_polyline(),
            Ok(false) => {}
            Err(Full { declared }) => self.notify(
                NotificationType::ProtocolViolation,
                "VERTEX",
                format!("polyline already holds its {declared} vertices, discarded"),
            ),
        }
    }

    fn add_spline(&mut self, spline: SplineBegin) {
        self.settle_spline("new spline");
        self.pending_spline = Some(PendingSpline::begin(spline, self.attributes.clone()));
        self.finish_spline_if_complete();
    }

    fn add_control_point(&mut self, control_point: ControlPoint) {
        self.spline_item("CONTROL_POINT", |s| s.push_control_point(control_point));
    }

    fn add_knot(&mut self, knot: f64) {
        self.spline_item("KNOT", |s| s.push_knot(knot));
    }

    fn add_fit_point(&mut self, fit_point: Vector3) {
        self.spline_item("FIT_POINT", |s| s.push_fit_point(fit_point));
    }

    fn add_layer(&mut self, _layer: LayerRecord) {
        self.ignored("LAYER");
    }

    fn add_linetype(&mut self, _linetype: LinetypeRecord) {
        self.ignored("LTYPE");
    }

    fn add_linetype_dash(&mut self, _length: f64) {
        self.ignored("LTYPE_DASH");
    }

    fn add_text_style(&mut self, _style: StyleRecord) {
        self.ignored("STYLE");
    }

    fn add_block(&mut self, _block: BlockRecord) {
        self.ignored("BLOCK");
    }

    fn end_block(&mut self) {
        self.ignored("ENDBLK");
    }

    fn add_dimension(&mut self, _dimension: DimensionRecord) {
        self.ignored("DIMENSION");
    }

    fn add_leader(&mut self, _leader: LeaderRecord) {
        self.ignored("LEADER");
    }

    fn add_leader_vertex(&mut self, _vertex: Vector3) {
        self.ignored("LEADER_VERTEX");
    }

    fn add_hatch_loop(&mut self, _hatch_loop: HatchLoopRecord) {
        self.ignored("HATCH_LOOP");
    }

    fn add_hatch_edge(&mut self, _edge: HatchEdgeType) {
        self.ignored("HATCH_EDGE");
    }

    fn link_image(&mut self, _definition: ImageDefRecord) {
        self.ignored("IMAGEDEF");
    }

    fn add_dictionary(&mut self, _dictionary: DictionaryRecord) {
        self.ignored("DICTIONARY");
    }

    fn add_dictionary_entry(&mut self, _entry: DictionaryEntryRecord) {
        self.ignored("DICTIONARY_ENTRY");
    }

    fn add_xrecord(&mut self, _handle: String) {
        self.ignored("XRECORD");
    }

    fn add_xrecord_value(&mut self, _code: i32, _value: XValue) {
        self.ignored("XRECORD_VALUE");
    }

    fn add_xdata_app(&mut self, _app_id: String) {
        self.ignored("XDATA_APP");
    }

    fn add_xdata_value(&mut self, _code: i32, _value: XValue) {
        self.ignored("XDATA_VALUE");
    }

    fn set_variable(&mut self, _name: String, _value: VariableValue, _code: i32) {
        self.ignored("VARIABLE");
    }

    fn add_comment(&mut self, _comment: String) {
        self.ignored("COMMENT");
    }

    fn end_sequence(&mut self) {
        self.ignored("SEQEND");
    }

    fn add_arc_aligned_text(&mut self, _text: ArcAlignedTextRecord) {
        self.ignored("ARCALIGNEDTEXT");
    }

    fn add_mtext_chunk(&mut self, _chunk: String) {
        self.ignored("MTEXT_CHUNK");
    }

    fn add_3d_face(&mut self, _face: Face3dRecord) {
        self.ignored("3DFACE");
    }

    fn end_of_stream(&mut self) {
        self.flush();
    }
}
