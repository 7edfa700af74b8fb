//! Integration tests for DXF reading

mod common;

use common::*;
use dxf_assembler::events::{
    BlockRecord, DimensionKind, DimensionRecord, EventReceiver, LayerRecord, VariableValue, XValue,
};
use dxf_assembler::io::dxf::{DxfReader, DxfReaderConfiguration};
use dxf_assembler::{
    Attributes, Color, DxfError, EntityAssembler, EntityType, LineWeight, NotificationType,
};
use std::fs;
use std::io::{Cursor, Write};

/// Test that DxfReader can be created from a non-existent file (should error)
#[test]
fn test_dxf_reader_from_nonexistent_file() {
    let result = DxfReader::from_file("nonexistent.dxf");
    assert!(matches!(result, Err(DxfError::Io(_))));
}

#[test]
fn test_read_from_temp_file() {
    let path = std::env::temp_dir().join(format!("dxf_assembler_{}.dxf", std::process::id()));
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(entities_dxf("0\nCIRCLE\n8\nHOLES\n10\n1.0\n20\n2.0\n40\n0.5\n").as_bytes())
        .unwrap();
    drop(file);

    let result = dxf_assembler::Drawing::from_file(&path);
    let _ = fs::remove_file(&path);

    let drawing = result.unwrap();
    assert_eq!(drawing.len(), 1);
    match &drawing.entities()[0].specific {
        EntityType::Circle(c) => {
            assert_eq!(c.radius, 0.5);
            assert_eq!(c.center.y, 2.0);
        }
        other => panic!("expected a circle, got {other:?}"),
    }
    assert_eq!(drawing.entities()[0].layer(), "HOLES");
}

#[test]
fn test_attributes_from_common_groups() {
    let drawing = read_dxf(&entities_dxf(
        "0\nLINE\n8\nWALLS\n6\nDASHED\n62\n1\n370\n35\n10\n0\n20\n0\n11\n10\n21\n0\n\
         0\nLINE\n10\n0\n20\n0\n11\n1\n21\n1\n",
    ));

    assert_eq!(drawing.len(), 2);
    let first = &drawing.entities()[0].attributes;
    assert_eq!(first.layer, "WALLS");
    assert_eq!(first.line_type, "DASHED");
    assert_eq!(first.color, Color::RED);
    assert_eq!(first.line_weight, LineWeight::Value(35));
    assert_eq!(drawing.entities()[1].attributes, Attributes::default());
}

#[test]
fn test_heavy_polyline_with_seqend() {
    let drawing = read_dxf(&entities_dxf(
        "0\nPOLYLINE\n8\nOUTLINE\n66\n1\n70\n1\n10\n0\n20\n0\n30\n2.5\n\
         0\nVERTEX\n8\nOUTLINE\n10\n0\n20\n0\n\
         0\nVERTEX\n8\nOUTLINE\n10\n4\n20\n0\n42\n0.5\n\
         0\nVERTEX\n8\nOUTLINE\n10\n4\n20\n3\n\
         0\nSEQEND\n8\nOUTLINE\n\
         0\nPOINT\n10\n9\n20\n9\n",
    ));

    let kinds: Vec<_> = drawing.iter().map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["POLYLINE", "POINT"]);
    let pl = drawing.entities()[0].as_polyline().unwrap();
    assert_eq!(pl.vertices.len(), 3);
    assert!(pl.is_closed());
    assert_eq!(pl.elevation, 2.5);
    assert_eq!(pl.vertices[1].bulge, 0.5);
    assert!(drawing.notifications().is_empty());
}

#[test]
fn test_lwpolyline_short_of_declared_count() {
    let drawing = read_dxf(&entities_dxf(
        "0\nLWPOLYLINE\n90\n4\n70\n0\n10\n0\n20\n0\n10\n1\n20\n0\n10\n1\n20\n1\n",
    ));

    assert_eq!(drawing.len(), 1);
    let pl = drawing.entities()[0].as_polyline().unwrap();
    assert_eq!(pl.vertices.len(), 3);
    assert_eq!(pl.declared_vertex_count, 4);
    assert_eq!(drawing.notifications().count_of(NotificationType::Incomplete), 1);
}

#[test]
fn test_spline_short_of_declared_knots() {
    let drawing = read_dxf(&entities_dxf(
        "0\nSPLINE\n70\n8\n71\n1\n72\n4\n73\n2\n74\n0\n40\n0\n40\n1\n\
         10\n0\n20\n0\n30\n0\n10\n1\n20\n1\n30\n0\n",
    ));

    assert!(drawing.is_empty());
    assert_eq!(drawing.notifications().len(), 1);
    assert_eq!(drawing.notifications().count_of(NotificationType::Incomplete), 1);
}

#[test]
fn test_complete_spline_from_file() {
    let drawing = read_dxf(&entities_dxf(
        "0\nSPLINE\n70\n12\n71\n1\n72\n4\n73\n2\n74\n0\n\
         40\n0\n40\n0\n40\n1\n40\n1\n\
         10\n0\n20\n0\n30\n0\n41\n1.0\n10\n1\n20\n1\n30\n0\n41\n0.5\n",
    ));

    assert_eq!(drawing.len(), 1);
    let s = drawing.entities()[0].as_spline().unwrap();
    assert_eq!(s.degree, 1);
    assert_eq!(s.knots, vec![0.0, 0.0, 1.0, 1.0]);
    assert!(s.is_rational());
    assert_eq!(s.control_points[1].weight, 0.5);
}

#[test]
fn test_unknown_entity_is_skipped() {
    let drawing = read_dxf(&entities_dxf(
        "0\nMESH\n8\n0\n71\n2\n0\nPOINT\n10\n1\n20\n1\n",
    ));
    assert_eq!(drawing.len(), 1);
    assert_eq!(drawing.entities()[0].kind_name(), "POINT");
}

#[test]
fn test_simple_kinds_from_file() {
    let drawing = read_dxf(&entities_dxf(
        "0\nARC\n10\n0\n20\n0\n40\n2\n50\n0\n51\n90\n\
         0\nTEXT\n1\nHello\n10\n1\n20\n1\n40\n2.5\n72\n1\n\
         0\nMTEXT\n3\nfirst-\n1\nsecond\n10\n0\n20\n0\n40\n1\n71\n5\n\
         0\nINSERT\n2\nDOOR\n10\n3\n20\n4\n41\n2\n\
         0\nELLIPSE\n10\n0\n20\n0\n11\n2\n21\n0\n40\n0.5\n\
         0\nTRACE\n10\n0\n20\n0\n11\n1\n21\n0\n12\n0\n22\n1\n13\n1\n23\n1\n",
    ));

    let kinds: Vec<_> = drawing.iter().map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["ARC", "TEXT", "MTEXT", "INSERT", "ELLIPSE", "TRACE"]);
    match &drawing.entities()[0].specific {
        EntityType::Arc(arc) => assert_eq!(arc.sweep_angle(), 90.0),
        other => panic!("unexpected {other:?}"),
    }
    match &drawing.entities()[2].specific {
        EntityType::MText(m) => assert_eq!(m.value, "first-second"),
        other => panic!("unexpected {other:?}"),
    }
    match &drawing.entities()[3].specific {
        EntityType::Insert(i) => {
            assert_eq!(i.block_name, "DOOR");
            assert_eq!(i.scale.x, 2.0);
            assert_eq!(i.scale.y, 1.0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_comments_and_blank_trailer() {
    let text = format!("999\nmade by a test\n{}\n\n", entities_dxf("0\nPOINT\n10\n0\n20\n0\n"));
    assert_eq!(read_dxf(&text).len(), 1);
}

#[test]
fn test_malformed_input_strict_and_failsafe() {
    let text = "0\nSECTION\n2\nENTITIES\n0\nLINE\n10\n0\n20\n0\n11\n1\n21\n0\n0\nPOLYLINE\n70\n";

    let strict = read_dxf_with(text, DxfReaderConfiguration::default());
    assert!(matches!(strict, Err(DxfError::Parse(_))));

    let drawing = read_dxf_with(
        text,
        DxfReaderConfiguration {
            failsafe: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(drawing.len(), 1);
    assert!(drawing.notifications().has_type(NotificationType::Error));
}

#[test]
fn test_record_ignored_through_reader() {
    let text = "0\nSECTION\n2\nTABLES\n0\nTABLE\n2\nLAYER\n0\nLAYER\n2\nWALLS\n62\n-3\n6\nCONTINUOUS\n0\nENDTAB\n0\nENDSEC\n0\nEOF\n";
    let mut config = DxfReaderConfiguration::default();
    config.assembler.record_ignored = true;
    let drawing = read_dxf_with(text, config).unwrap();

    assert!(drawing.is_empty());
    let ignored = drawing.notifications().of_type(NotificationType::Ignored);
    assert_eq!(ignored.len(), 1);
    assert_eq!(ignored[0].record, "LAYER");
}

/// Collects the non-entity records a file produces
#[derive(Default)]
struct Collector {
    variables: Vec<(String, VariableValue)>,
    layers: Vec<LayerRecord>,
    blocks: Vec<BlockRecord>,
    block_ends: usize,
    dimensions: Vec<DimensionRecord>,
    xdata: Vec<(i32, XValue)>,
    comments: Vec<String>,
    dictionary_entries: Vec<String>,
    ends: usize,
}

impl EventReceiver for Collector {
    fn set_variable(&mut self, name: String, value: VariableValue, _code: i32) {
        self.variables.push((name, value));
    }
    fn add_layer(&mut self, layer: LayerRecord) {
        self.layers.push(layer);
    }
    fn add_block(&mut self, block: BlockRecord) {
        self.blocks.push(block);
    }
    fn end_block(&mut self) {
        self.block_ends += 1;
    }
    fn add_dimension(&mut self, dimension: DimensionRecord) {
        self.dimensions.push(dimension);
    }
    fn add_xdata_value(&mut self, code: i32, value: XValue) {
        self.xdata.push((code, value));
    }
    fn add_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }
    fn add_dictionary_entry(&mut self, entry: dxf_assembler::events::DictionaryEntryRecord) {
        self.dictionary_entries.push(entry.name);
    }
    fn end_of_stream(&mut self) {
        self.ends += 1;
    }
}

#[test]
fn test_read_into_custom_receiver() {
    let text = "999\nheader comment\n\
0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n9\n$INSBASE\n10\n1.0\n20\n2.0\n30\n0.0\n9\n$LUNITS\n70\n2\n0\nENDSEC\n\
0\nSECTION\n2\nTABLES\n0\nTABLE\n2\nLAYER\n0\nLAYER\n2\nWALLS\n70\n0\n62\n-5\n6\nCONTINUOUS\n0\nENDTAB\n0\nENDSEC\n\
0\nSECTION\n2\nBLOCKS\n0\nBLOCK\n2\nDOOR\n70\n0\n10\n0\n20\n0\n0\nLINE\n10\n0\n20\n0\n11\n1\n21\n0\n0\nENDBLK\n0\nENDSEC\n\
0\nSECTION\n2\nENTITIES\n0\nDIMENSION\n70\n33\n10\n1\n20\n1\n1001\nACAD\n1000\nnote\n1070\n7\n0\nENDSEC\n\
0\nSECTION\n2\nOBJECTS\n0\nDICTIONARY\n5\nC\n3\nACAD_GROUP\n350\nD\n3\nACAD_LAYOUT\n350\n1A\n0\nENDSEC\n\
0\nEOF\n";

    let mut reader = DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec())).unwrap();
    let mut collector = Collector::default();
    reader.read_into(&mut collector).unwrap();

    assert_eq!(reader.version(), Some("AC1015"));
    assert_eq!(collector.ends, 1);
    assert_eq!(collector.comments, vec!["header comment"]);

    let names: Vec<_> = collector.variables.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["$ACADVER", "$INSBASE", "$LUNITS"]);
    assert_eq!(
        collector.variables[1].1,
        VariableValue::Vector(dxf_assembler::Vector3::new(1.0, 2.0, 0.0))
    );
    assert_eq!(collector.variables[2].1, VariableValue::Int(2));

    assert_eq!(collector.layers.len(), 1);
    assert!(collector.layers[0].off);
    assert_eq!(collector.layers[0].color, Color::BLUE);

    assert_eq!(collector.blocks[0].name, "DOOR");
    assert_eq!(collector.block_ends, 1);

    assert_eq!(collector.dimensions[0].kind, DimensionKind::Aligned);
    assert_eq!(
        collector.xdata,
        vec![(1000, XValue::String("note".into())), (1070, XValue::Int(7))]
    );
    assert_eq!(collector.dictionary_entries, vec!["ACAD_GROUP", "ACAD_LAYOUT"]);
}

#[test]
fn test_huge_declared_vertex_count() {
    let drawing = read_dxf(&entities_dxf(
        "0\nLWPOLYLINE\n90\n9223372036854775807\n10\n0\n20\n0\n",
    ));

    assert_eq!(drawing.len(), 1);
    let pl = drawing.entities()[0].as_polyline().unwrap();
    assert_eq!(pl.vertices.len(), 1);
    assert_eq!(drawing.notifications().count_of(NotificationType::Incomplete), 1);
}

#[test]
fn test_mtext_chunks_keep_trailing_spaces() {
    let drawing = read_dxf(&entities_dxf(
        "0\nMTEXT\n3\nHello \n3\nbig \n1\nworld\n10\n0\n20\n0\n0\nTEXT\n1\n  padded  \n10\n0\n20\n0\n",
    ));

    match &drawing.entities()[0].specific {
        EntityType::MText(m) => assert_eq!(m.value, "Hello big world"),
        other => panic!("unexpected {other:?}"),
    }
    match &drawing.entities()[1].specific {
        EntityType::Text(t) => assert_eq!(t.value, "  padded  "),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_orphan_vertex_keeps_current_attributes() {
    let text = entities_dxf("0\nLINE\n8\nWALLS\n10\n0\n20\n0\n11\n1\n21\n0\n0\nVERTEX\n8\nSTRAY\n10\n5\n20\n5\n");
    let mut reader = DxfReader::from_reader(Cursor::new(text.into_bytes())).unwrap();
    let mut asm = EntityAssembler::new();
    reader.read_into(&mut asm).unwrap();

    assert_eq!(asm.attributes().layer, "WALLS");
    assert_eq!(asm.entities().len(), 1);
    assert_eq!(asm.notifications().count_of(NotificationType::ProtocolViolation), 1);
}
