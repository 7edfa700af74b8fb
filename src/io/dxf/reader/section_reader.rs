//! DXF section readers
//!
//! Each record is buffered up to its next `0` group and translated into
//! receiver calls. Entity records are preceded by `set_attributes` and
//! followed by their extended data.

use super::record::{point_list, x_value, Record};
use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::entities::*;
use crate::error::Result;
use crate::events::DrawingEvent as Event;
use crate::events::*;
use crate::types::{Color, Vector3};
use tracing::{debug, trace};

/// Section reader driving an [`EventReceiver`]
pub struct SectionReader<'a, R: EventReceiver + ?Sized> {
    reader: &'a mut Box<dyn DxfStreamReader>,
    receiver: &'a mut R,
}

impl<'a, R: EventReceiver + ?Sized> SectionReader<'a, R> {
    pub fn new(reader: &'a mut Box<dyn DxfStreamReader>, receiver: &'a mut R) -> Self {
        Self { reader, receiver }
    }

    /// Read every section up to the EOF marker or the end of input
    pub fn read_sections(&mut self) -> Result<()> {
        while let Some(record) = self.next_record()? {
            match record.name.as_str() {
                "SECTION" => {
                    let name = record.string_or(2, "");
                    match name.trim() {
                        "HEADER" => self.read_header(&record),
                        "TABLES" => self.read_tables()?,
                        "BLOCKS" => self.read_blocks()?,
                        "ENTITIES" => self.read_entities()?,
                        "OBJECTS" => self.read_objects()?,
                        _ => {
                            debug!(section = %name, "skipping section");
                            self.read_section(|_, _| Ok(()))?;
                        }
                    }
                }
                "EOF" => break,
                // Closes HEADER, whose variables were read with its SECTION record
                "ENDSEC" => {}
                other => trace!(record = other, "record outside of a section"),
            }
        }
        Ok(())
    }

    /// HEADER variables arrive in the SECTION record itself: no `0` groups
    /// appear until ENDSEC
    fn read_header(&mut self, section: &Record) {
        let mut pairs = section.pairs.iter().skip_while(|p| p.code != 9).peekable();
        while let Some(name) = pairs.next() {
            let mut values: Vec<&DxfCodePair> = Vec::new();
            while let Some(value) = pairs.next_if(|p| p.code != 9) {
                values.push(value);
            }
            let Some(first) = values.first() else {
                continue;
            };
            let value = if values.len() > 1 && first.as_double().is_some() {
                let coord = |offset: i32| {
                    values
                        .iter()
                        .find(|p| p.code == first.code + offset)
                        .and_then(|p| p.as_double())
                        .unwrap_or(0.0)
                };
                VariableValue::Vector(Vector3::new(coord(0), coord(10), coord(20)))
            } else if let Some(d) = first.as_double() {
                VariableValue::Double(d)
            } else if let Some(i) = first.as_int() {
                VariableValue::Int(i)
            } else {
                VariableValue::String(first.value_string.clone())
            };
            self.receiver
                .set_variable(name.value_string.clone(), value, first.code);
        }
    }

    fn read_tables(&mut self) -> Result<()> {
        self.read_section(|this, record| {
            match record.name.as_str() {
                "LAYER" => {
                    let index = record.i16_or(62, 7);
                    this.receiver.add_layer(LayerRecord {
                        name: record.string_or(2, ""),
                        flags: record.i16_or(70, 0),
                        color: Color::from_index(index),
                        off: index < 0,
                        line_type: record.string_or(6, "CONTINUOUS"),
                    });
                }
                "LTYPE" => {
                    this.receiver.add_linetype(LinetypeRecord {
                        name: record.string_or(2, ""),
                        description: record.string_or(3, ""),
                        flags: record.i16_or(70, 0),
                        dash_count: record.count(73),
                        pattern_length: record.double_or(40, 0.0),
                    });
                    for dash in record.body().iter().filter(|p| p.code == 49) {
                        this.receiver.add_linetype_dash(dash.as_double().unwrap_or(0.0));
                    }
                }
                "STYLE" => this.receiver.add_text_style(StyleRecord {
                    name: record.string_or(2, ""),
                    flags: record.i16_or(70, 0),
                    fixed_height: record.double_or(40, 0.0),
                    width_factor: record.double_or(41, 1.0),
                    oblique_angle: record.double_or(50, 0.0),
                    primary_font_file: record.string_or(3, ""),
                    big_font_file: record.string_or(4, ""),
                }),
                _ => {}
            }
            Ok(())
        })
    }

    fn read_blocks(&mut self) -> Result<()> {
        self.read_section(|this, record| {
            if record.name == "BLOCK" {
                this.receiver.add_block(BlockRecord {
                    name: record.string_or(2, ""),
                    flags: record.i16_or(70, 0),
                    base_point: record.point(10),
                });
                Ok(())
            } else if record.name == "ENDBLK" {
                this.receiver.end_block();
                Ok(())
            } else {
                this.read_entity(record)
            }
        })
    }

    fn read_entities(&mut self) -> Result<()> {
        self.read_section(|this, record| this.read_entity(record))
    }

    fn read_objects(&mut self) -> Result<()> {
        self.read_section(|this, record| {
            match record.name.as_str() {
                "DICTIONARY" => {
                    this.receiver.add_dictionary(DictionaryRecord {
                        handle: record.string_or(5, ""),
                    });
                    let mut name: Option<String> = None;
                    for pair in record.body() {
                        match pair.code {
                            3 => name = Some(pair.value_string.clone()),
                            350 | 360 => {
                                if let Some(name) = name.take() {
                                    this.receiver.add_dictionary_entry(DictionaryEntryRecord {
                                        name,
                                        handle: pair.value_string.clone(),
                                    });
                                }
                            }
                            _ => {}
                        }
                    }
                }
                "IMAGEDEF" => this.receiver.link_image(ImageDefRecord {
                    handle: record.string_or(5, ""),
                    file_name: record.string_or(1, ""),
                }),
                "XRECORD" => {
                    this.receiver.add_xrecord(record.string_or(5, ""));
                    for pair in xrecord_values(&record) {
                        this.receiver.add_xrecord_value(pair.code, x_value(pair));
                    }
                }
                _ => {}
            }
            Ok(())
        })
    }

    /// Translate one entity record; POLYLINE also consumes its vertices
    fn read_entity(&mut self, record: Record) -> Result<()> {
        if record.name == "POLYLINE" {
            return self.read_polyline(record);
        }
        if record.name == "SEQEND" {
            self.receiver.end_sequence();
            return Ok(());
        }
        // A vertex outside a POLYLINE produces nothing; keep the current attributes
        if record.name == "VERTEX" {
            self.receiver.add_vertex(vertex(&record));
            return Ok(());
        }

        let Some(events) = entity_events(&record) else {
            debug!(record = %record.name, "unsupported entity skipped");
            return Ok(());
        };
        self.receiver.set_attributes(record.attributes());
        for event in events {
            event.dispatch(&mut *self.receiver);
        }
        self.emit_extended_data(&record);
        Ok(())
    }

    /// POLYLINE header, its VERTEX records, then SEQEND
    fn read_polyline(&mut self, header: Record) -> Result<()> {
        let mut vertices = Vec::new();
        let mut terminated = false;
        while let Some(record) = self.next_record_if(&["VERTEX", "SEQEND"])? {
            if record.name == "SEQEND" {
                terminated = true;
                break;
            }
            let flags = record.i16_or(70, 0);
            // Face records of a polyface mesh carry 128 without 64
            if flags & 128 != 0 && flags & 64 == 0 {
                continue;
            }
            vertices.push(vertex(&record));
        }

        self.receiver.set_attributes(header.attributes());
        self.receiver.add_polyline(PolylineBegin {
            vertex_count: vertices.len(),
            flags: PolylineFlags::from_bits_truncate(header.i16_or(70, 0) as u16),
            elevation: header.point(10).z,
        });
        for v in vertices {
            self.receiver.add_vertex(v);
        }
        self.emit_extended_data(&header);
        if terminated {
            self.receiver.end_sequence();
        }
        Ok(())
    }

    fn emit_extended_data(&mut self, record: &Record) {
        for pair in record.extended_data() {
            if pair.code == 1001 {
                self.receiver.add_xdata_app(pair.value_string.clone());
            } else {
                self.receiver.add_xdata_value(pair.code, x_value(pair));
            }
        }
    }

    /// Hand each record of the current section to `f` until ENDSEC
    fn read_section<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Self, Record) -> Result<()>,
    {
        while let Some(record) = self.next_record()? {
            match record.name.as_str() {
                "ENDSEC" => return Ok(()),
                "EOF" => {
                    // Truncated section: leave EOF for the outer loop
                    self.reader.push_back(DxfCodePair::new(0, "EOF"));
                    return Ok(());
                }
                _ => f(self, record)?,
            }
        }
        Ok(())
    }

    /// The next record, or `None` at the end of input
    fn next_record(&mut self) -> Result<Option<Record>> {
        while let Some(pair) = self.reader.read_pair()? {
            match pair.code {
                0 => return self.read_record(pair.value_string).map(Some),
                999 => self.receiver.add_comment(pair.value_string),
                code => trace!(code, "stray group outside of a record"),
            }
        }
        Ok(None)
    }

    /// The next record if its name is one of `names`; otherwise it is left
    /// unread
    fn next_record_if(&mut self, names: &[&str]) -> Result<Option<Record>> {
        while let Some(pair) = self.reader.read_pair()? {
            match pair.code {
                0 if names.contains(&pair.value_string.as_str()) => {
                    return self.read_record(pair.value_string).map(Some);
                }
                0 => {
                    self.reader.push_back(pair);
                    return Ok(None);
                }
                999 => self.receiver.add_comment(pair.value_string),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Read pairs up to the next `0` group, leaving it unread
    fn read_record(&mut self, name: String) -> Result<Record> {
        let mut record = Record::new(name);
        while let Some(pair) = self.reader.read_pair()? {
            match pair.code {
                0 => {
                    self.reader.push_back(pair);
                    break;
                }
                999 => self.receiver.add_comment(pair.value_string),
                _ => record.pairs.push(pair),
            }
        }
        Ok(record)
    }
}

/// Receiver calls for an entity record, `None` for unsupported kinds
fn entity_events(record: &Record) -> Option<Vec<Event>> {
    let r = record;
    let events = match r.name.as_str() {
        "POINT" => vec![Event::Point(Point::new(r.point(10)))],
        "LINE" => vec![Event::Line(Line::from_points(r.point(10), r.point(11)))],
        "XLINE" => vec![Event::XLine(XLine::new(r.point(10), r.point(11)))],
        "RAY" => vec![Event::Ray(Ray::new(r.point(10), r.point(11)))],
        "CIRCLE" => vec![Event::Circle(Circle::new(r.point(10), r.double_or(40, 0.0)))],
        "ARC" => vec![Event::Arc(Arc::new(
            r.point(10),
            r.double_or(40, 0.0),
            r.double_or(50, 0.0),
            r.double_or(51, 360.0),
        ))],
        "ELLIPSE" => vec![Event::Ellipse(Ellipse {
            center: r.point(10),
            major_axis: r.point(11),
            ratio: r.double_or(40, 1.0),
            start_parameter: r.double_or(41, 0.0),
            end_parameter: r.double_or(42, std::f64::consts::TAU),
        })],
        "TEXT" => vec![Event::Text(text(r, 73))],
        "ATTDEF" => vec![Event::AttributeDefinition(AttributeDefinition {
            text: text(r, 74),
            tag: r.string_or(2, ""),
            prompt: r.string_or(3, ""),
            flags: AttributeFlags::from_bits_truncate(r.i16_or(70, 0)),
        })],
        "MTEXT" => mtext(r),
        "INSERT" => vec![Event::Insert(Insert {
            block_name: r.string_or(2, ""),
            insert_point: r.point(10),
            scale: Vector3::new(r.double_or(41, 1.0), r.double_or(42, 1.0), r.double_or(43, 1.0)),
            rotation: r.double_or(50, 0.0),
            column_count: r.i16_or(70, 1).max(1) as u16,
            row_count: r.i16_or(71, 1).max(1) as u16,
            column_spacing: r.double_or(44, 0.0),
            row_spacing: r.double_or(45, 0.0),
        })],
        "SOLID" => vec![Event::Solid(solid(r))],
        "TRACE" => vec![Event::Trace(solid(r))],
        "HATCH" => hatch(r),
        "IMAGE" => vec![Event::Image(image(r))],
        "LWPOLYLINE" => lwpolyline(r),
        "SPLINE" => spline(r),
        "DIMENSION" => vec![Event::Dimension(DimensionRecord {
            kind: DimensionKind::from(r.i16_or(70, 0)),
            definition_point: r.point(10),
            text_midpoint: r.point(11),
            text: r.string_or(1, ""),
            style: r.string_or(3, "STANDARD"),
            angle: r.double_or(50, 0.0),
        })],
        "LEADER" => {
            let mut events = vec![Event::Leader(LeaderRecord {
                style: r.string_or(3, "STANDARD"),
                arrowhead: r.i16_or(71, 1) != 0,
                path_type: r.i16_or(72, 0),
                vertex_count: r.count(76),
            })];
            events.extend(point_list(r.body(), 10).into_iter().map(Event::LeaderVertex));
            events
        }
        "3DFACE" => vec![Event::Face3d(Face3dRecord {
            corners: corners(r),
            invisible_edges: r.i16_or(70, 0),
        })],
        "ARCALIGNEDTEXT" => vec![Event::ArcAlignedText(ArcAlignedTextRecord {
            text: r.string_or(1, ""),
            font_name: r.string_or(2, ""),
            center: r.point(10),
            radius: r.double_or(40, 0.0),
            start_angle: r.double_or(50, 0.0),
            end_angle: r.double_or(51, 0.0),
        })],
        _ => return None,
    };
    Some(events)
}

fn text(r: &Record, vertical_code: i32) -> Text {
    Text {
        value: r.string_or(1, ""),
        insertion_point: r.point(10),
        alignment_point: r.point(11),
        height: r.double_or(40, 0.0),
        width_factor: r.double_or(41, 1.0),
        rotation: r.double_or(50, 0.0),
        generation_flags: r.i16_or(71, 0),
        style: r.string_or(7, "STANDARD"),
        horizontal_alignment: TextHorizontalAlignment::from(r.i16_or(72, 0)),
        vertical_alignment: TextVerticalAlignment::from(r.i16_or(vertical_code, 0)),
    }
}

/// One chunk event per group 3, then the entity with the joined text
fn mtext(r: &Record) -> Vec<Event> {
    let chunks: Vec<String> = r
        .body()
        .iter()
        .filter(|p| p.code == 3)
        .map(|p| p.value_string.clone())
        .collect();
    let mut value = chunks.concat();
    value.push_str(r.string(1).unwrap_or(""));

    let mut events: Vec<Event> = chunks.into_iter().map(Event::MTextChunk).collect();
    events.push(Event::MText(MText {
        value,
        insertion_point: r.point(10),
        direction: if r.has(11) { r.point(11) } else { Vector3::UNIT_X },
        height: r.double_or(40, 0.0),
        rectangle_width: r.double_or(41, 0.0),
        attachment_point: AttachmentPoint::from(r.i16_or(71, 1)),
        drawing_direction: DrawingDirection::from(r.i16_or(72, 1)),
        line_spacing_style: r.i16_or(73, 1),
        line_spacing_factor: r.double_or(44, 1.0),
        style: r.string_or(7, "STANDARD"),
        rotation: r.double_or(50, 0.0),
    }));
    events
}

/// Corners 10..13; a missing fourth corner repeats the third
fn corners(r: &Record) -> [Vector3; 4] {
    let third = r.point(12);
    [
        r.point(10),
        r.point(11),
        third,
        if r.has(13) { r.point(13) } else { third },
    ]
}

fn solid(r: &Record) -> Solid {
    Solid {
        corners: corners(r),
        thickness: r.double_or(39, 0.0),
    }
}

/// Hatch header, then a loop event per boundary path and an edge event per
/// edge of the non-polyline paths
fn hatch(r: &Record) -> Vec<Event> {
    let mut events = vec![Event::Hatch(Hatch {
        pattern_name: r.string_or(2, ""),
        solid: r.i16_or(70, 0) == 1,
        loop_count: r.count(91) as u32,
        angle: r.double_or(52, 0.0),
        scale: r.double_or(41, 1.0),
    })];

    let mut path_type: Option<i32> = None;
    for pair in r.body() {
        match pair.code {
            92 => path_type = pair.as_i32(),
            93 => {
                if let Some(path_type) = path_type {
                    events.push(Event::HatchLoop(HatchLoopRecord {
                        path_type,
                        edge_count: pair.as_int().unwrap_or(0).max(0) as usize,
                    }));
                }
            }
            72 => {
                if let (Some(pt), Some(edge)) = (path_type, pair.as_i16()) {
                    if pt & 2 == 0 {
                        events.push(Event::HatchEdge(HatchEdgeType::from(edge)));
                    }
                }
            }
            // Hatch style follows the last boundary path
            75 => path_type = None,
            _ => {}
        }
    }
    events
}

fn image(r: &Record) -> Image {
    let percent = |code: i32, default: i16| r.i16_or(code, default).clamp(0, 100) as u8;
    Image {
        definition_handle: r.string_or(340, ""),
        insertion_point: r.point(10),
        u_vector: r.point(11),
        v_vector: r.point(12),
        width: r.double_or(13, 0.0),
        height: r.double_or(23, 0.0),
        brightness: percent(281, 50),
        contrast: percent(282, 50),
        fade: percent(283, 0),
    }
}

fn vertex(r: &Record) -> Vertex {
    Vertex::with_bulge(r.point(10), r.double_or(42, 0.0))
}

/// Header with N from group 90, then the 10/20 vertices; a 42 bulge belongs
/// to the vertex before it
fn lwpolyline(r: &Record) -> Vec<Event> {
    let mut vertices: Vec<Vertex> = Vec::new();
    for pair in r.body() {
        let Some(value) = pair.as_double() else {
            continue;
        };
        match pair.code {
            10 => vertices.push(Vertex::new(Vector3::new(value, 0.0, 0.0))),
            20 => {
                if let Some(last) = vertices.last_mut() {
                    last.location.y = value;
                }
            }
            42 => {
                if let Some(last) = vertices.last_mut() {
                    last.bulge = value;
                }
            }
            _ => {}
        }
    }

    let mut events = vec![Event::PolylineBegin(PolylineBegin {
        vertex_count: r.count(90),
        flags: PolylineFlags::from_bits_truncate(r.i16_or(70, 0) as u16),
        elevation: r.double_or(38, 0.0),
    })];
    events.extend(vertices.into_iter().map(Event::Vertex));
    events
}

/// Header with counts from 72/73/74, then knots, control points and fit
/// points in that order
fn spline(r: &Record) -> Vec<Event> {
    let body = r.body();
    let mut events = vec![Event::SplineBegin(SplineBegin {
        degree: r.int(71).and_then(|d| u32::try_from(d).ok()).unwrap_or(3),
        knot_count: r.count(72),
        control_point_count: r.count(73),
        fit_point_count: r.count(74),
        flags: SplineFlags::from_bits_truncate(r.i16_or(70, 0) as u16),
    })];

    events.extend(
        body.iter()
            .filter(|p| p.code == 40)
            .filter_map(|p| p.as_double())
            .map(Event::Knot),
    );

    let weights: Vec<f64> = body
        .iter()
        .filter(|p| p.code == 41)
        .filter_map(|p| p.as_double())
        .collect();
    events.extend(
        point_list(body, 10)
            .into_iter()
            .enumerate()
            .map(|(i, location)| {
                let weight = weights.get(i).copied().unwrap_or(1.0);
                Event::ControlPoint(ControlPoint::weighted(location, weight))
            }),
    );

    events.extend(point_list(body, 11).into_iter().map(Event::FitPoint));
    events
}

/// XRECORD data: everything after the subclass marker and cloning flag
fn xrecord_values(record: &Record) -> impl Iterator<Item = &DxfCodePair> {
    let body = record.body();
    let start = body
        .iter()
        .position(|p| p.code == 100 && p.value_string.trim() == "AcDbXrecord")
        .map(|i| i + 1)
        .unwrap_or(0);
    let data = &body[start..];
    let skip = usize::from(data.first().is_some_and(|p| p.code == 280));
    data[skip..]
        .iter()
        .filter(|p| !matches!(p.code, 5 | 100 | 102 | 330 | 360))
}
