//! Integration tests for assembling event streams

mod common;

use common::*;
use dxf_assembler::{
    Color, DrawingEvent, EntityAssembler, EntityType, EventReceiver, NotificationType,
};
use dxf_assembler::{Attributes, AssemblerConfiguration};

#[test]
fn test_simple_entities_keep_order_and_attributes() {
    let drawing = assemble([
        attributes("A"),
        line(0.0),
        point(1.0),
        attributes("B"),
        circle(2.0),
    ]);

    let kinds: Vec<_> = drawing.iter().map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["LINE", "POINT", "CIRCLE"]);
    let layers: Vec<_> = drawing.iter().map(|e| e.layer()).collect();
    assert_eq!(layers, vec!["A", "A", "B"]);
    assert!(drawing.notifications().is_empty());
}

#[test]
fn test_complete_polyline() {
    let drawing = assemble([polyline(3), vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(1.0, 1.0)]);

    assert_eq!(drawing.len(), 1);
    let pl = drawing.entities()[0].as_polyline().unwrap();
    let xs: Vec<_> = pl.vertices.iter().map(|v| (v.location.x, v.location.y)).collect();
    assert_eq!(xs, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert!(drawing.notifications().is_empty());
}

#[test]
fn test_short_polyline_is_kept_at_stream_end() {
    let drawing = assemble([polyline(3), vertex(0.0, 0.0), vertex(1.0, 0.0)]);

    assert_eq!(drawing.len(), 1);
    let pl = drawing.entities()[0].as_polyline().unwrap();
    assert_eq!(pl.vertices.len(), 2);
    assert_eq!(pl.missing_vertices(), 1);
    assert_eq!(drawing.notifications().count_of(NotificationType::Incomplete), 1);
}

#[test]
fn test_interrupted_polyline_is_force_finalized() {
    let drawing = assemble([polyline(2), vertex(0.0, 0.0), polyline(1), vertex(5.0, 5.0)]);

    let counts: Vec<_> = drawing
        .iter()
        .map(|e| e.as_polyline().unwrap().vertices.len())
        .collect();
    assert_eq!(counts, vec![1, 1]);
    assert_eq!(drawing.entities()[1].as_polyline().unwrap().vertices[0].location.x, 5.0);
}

#[test]
fn test_complete_spline() {
    let drawing = assemble([spline(1, 1, 0), control_point(0.0), knot(0.0)]);

    assert_eq!(drawing.len(), 1);
    let s = drawing.entities()[0].as_spline().unwrap();
    assert_eq!(s.control_points.len(), 1);
    assert_eq!(s.knots.len(), 1);
    assert!(s.fit_points.is_empty());
}

#[test]
fn test_interrupted_spline_is_discarded() {
    let drawing = assemble([
        spline(1, 1, 0),
        control_point(0.0),
        spline(1, 1, 1),
        knot(0.0),
        control_point(1.0),
        fit_point(2.0),
    ]);

    assert_eq!(drawing.len(), 1);
    let s = drawing.entities()[0].as_spline().unwrap();
    assert_eq!(s.fit_points.len(), 1);
    assert_eq!(s.control_points[0].location.x, 1.0);
    assert_eq!(drawing.notifications().count_of(NotificationType::Incomplete), 1);
}

#[test]
fn test_spline_is_discarded_at_stream_end() {
    let drawing = assemble([spline(4, 2, 0), knot(0.0), control_point(0.0)]);
    assert!(drawing.is_empty());
    let n = &drawing.notifications().of_type(NotificationType::Incomplete)[0];
    assert_eq!(n.record, "SPLINE");
}

#[test]
fn test_orphans_are_reported_and_stream_continues() {
    let drawing = assemble([vertex(0.0, 0.0), knot(1.0), control_point(0.0), fit_point(0.0), line(1.0)]);

    assert_eq!(drawing.len(), 1);
    assert_eq!(drawing.entities()[0].kind_name(), "LINE");
    let records: Vec<_> = drawing.notifications().iter().map(|n| n.record).collect();
    assert_eq!(records, vec!["VERTEX", "KNOT", "CONTROL_POINT", "FIT_POINT"]);
    assert!(drawing
        .notifications()
        .iter()
        .all(|n| n.notification_type == NotificationType::ProtocolViolation));
}

#[test]
fn test_finalize_on_empty_slots_is_silent() {
    let mut asm = EntityAssembler::new();
    asm.finalize_polyline();
    asm.finalize_polyline();
    assert!(!asm.finalize_spline());
    assert!(!asm.finalize_spline());
    assert!(asm.entities().is_empty());
    assert!(asm.notifications().is_empty());
}

#[test]
fn test_attribute_changes_do_not_reach_earlier_entities() {
    let mut asm = EntityAssembler::new();
    asm.set_attributes(Attributes::with_layer("FIRST").with_color(Color::GREEN));
    asm.feed([line(0.0)]);
    asm.set_attributes(Attributes::with_layer("SECOND").with_color(Color::RED));
    asm.feed([line(1.0)]);

    let entities = asm.entities();
    assert_eq!(entities[0].layer(), "FIRST");
    assert_eq!(entities[0].color(), Color::GREEN);
    assert_eq!(entities[1].color(), Color::RED);
}

#[test]
fn test_composites_interleaved_with_simple_entities() {
    let drawing = assemble([
        polyline(2),
        vertex(0.0, 0.0),
        line(0.0),
        vertex(1.0, 0.0),
        point(0.0),
    ]);

    let kinds: Vec<_> = drawing.iter().map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["LINE", "POLYLINE", "POINT"]);
}

#[test]
fn test_ignored_events_produce_nothing() {
    let mut asm = EntityAssembler::with_configuration(AssemblerConfiguration {
        record_ignored: true,
    });
    asm.feed([
        DrawingEvent::Comment("drawn by hand".into()),
        DrawingEvent::XDataApp("ACAD".into()),
        DrawingEvent::SequenceEnd,
        DrawingEvent::BlockEnd,
        DrawingEvent::EndOfStream,
    ]);
    let drawing = asm.finish();

    assert!(drawing.is_empty());
    assert_eq!(drawing.notifications().count_of(NotificationType::Ignored), 4);
}

#[test]
fn test_entity_types_are_matched_exhaustively() {
    let drawing = assemble([line(0.0), polyline(0), spline(0, 0, 0)]);
    let mut seen = Vec::new();
    for entity in &drawing {
        let tag = match &entity.specific {
            EntityType::Line(_) => "line",
            EntityType::Polyline(p) if p.vertices.is_empty() => "empty polyline",
            EntityType::Spline(s) if s.is_complete() => "empty spline",
            _ => "other",
        };
        seen.push(tag);
    }
    assert_eq!(seen, vec!["line", "empty polyline", "empty spline"]);
}
