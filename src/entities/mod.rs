//! Finished drawing entities
//!
//! Every entity is an [`Entity`]: the presentation attributes captured when
//! it was created, plus one [`EntityType`] variant holding the kind-specific
//! fields. The set of kinds is closed, so consumers match exhaustively.

use crate::attributes::Attributes;
use crate::types::{Color, LineWeight};

pub mod arc;
pub mod attribute_definition;
pub mod circle;
pub mod ellipse;
pub mod hatch;
pub mod image;
pub mod insert;
pub mod line;
pub mod mtext;
pub mod point;
pub mod polyline;
pub mod ray;
pub mod solid;
pub mod spline;
pub mod text;
pub mod xline;

pub use arc::Arc;
pub use attribute_definition::{AttributeDefinition, AttributeFlags};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use hatch::Hatch;
pub use image::Image;
pub use insert::Insert;
pub use line::Line;
pub use mtext::{AttachmentPoint, DrawingDirection, MText};
pub use point::Point;
pub use polyline::{Polyline, PolylineFlags, Vertex};
pub use ray::Ray;
pub use solid::{Solid, Trace};
pub use spline::{ControlPoint, Spline, SplineFlags};
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};
pub use xline::XLine;

/// Kind-specific entity data
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Point(Point),
    Line(Line),
    Arc(Arc),
    Circle(Circle),
    Ellipse(Ellipse),
    Text(Text),
    Insert(Insert),
    Solid(Solid),
    Trace(Trace),
    XLine(XLine),
    Ray(Ray),
    MText(MText),
    AttributeDefinition(AttributeDefinition),
    /// Hatch header; boundary detail is not assembled
    Hatch(Hatch),
    Image(Image),
    /// Assembled from a polyline header and its vertices
    Polyline(Polyline),
    /// Assembled from a spline header, knots, control and fit points
    Spline(Spline),
}

impl EntityType {
    /// The DXF record name of this kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            EntityType::Point(_) => "POINT",
            EntityType::Line(_) => "LINE",
            EntityType::Arc(_) => "ARC",
            EntityType::Circle(_) => "CIRCLE",
            EntityType::Ellipse(_) => "ELLIPSE",
            EntityType::Text(_) => "TEXT",
            EntityType::Insert(_) => "INSERT",
            EntityType::Solid(_) => "SOLID",
            EntityType::Trace(_) => "TRACE",
            EntityType::XLine(_) => "XLINE",
            EntityType::Ray(_) => "RAY",
            EntityType::MText(_) => "MTEXT",
            EntityType::AttributeDefinition(_) => "ATTDEF",
            EntityType::Hatch(_) => "HATCH",
            EntityType::Image(_) => "IMAGE",
            EntityType::Polyline(_) => "POLYLINE",
            EntityType::Spline(_) => "SPLINE",
        }
    }

    /// True for kinds assembled from several records
    pub fn is_composite(&self) -> bool {
        matches!(self, EntityType::Polyline(_) | EntityType::Spline(_))
    }
}

/// A finished entity and the attributes it was created with
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub attributes: Attributes,
    pub specific: EntityType,
}

impl Entity {
    pub fn new(specific: EntityType, attributes: Attributes) -> Self {
        Entity {
            attributes,
            specific,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.specific.kind_name()
    }

    pub fn layer(&self) -> &str {
        &self.attributes.layer
    }

    pub fn line_type(&self) -> &str {
        &self.attributes.line_type
    }

    pub fn color(&self) -> Color {
        self.attributes.color
    }

    pub fn line_weight(&self) -> LineWeight {
        self.attributes.line_weight
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match &self.specific {
            EntityType::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_spline(&self) -> Option<&Spline> {
        match &self.specific {
            EntityType::Spline(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3;

    #[test]
    fn test_kind_names() {
        let line = EntityType::Line(Line::default());
        assert_eq!(line.kind_name(), "LINE");
        assert!(!line.is_composite());

        let spline = EntityType::Spline(Spline::default());
        assert_eq!(spline.kind_name(), "SPLINE");
        assert!(spline.is_composite());
    }

    #[test]
    fn test_accessors_read_the_attribute_copy() {
        let attrs = Attributes::with_layer("DIM").with_color(Color::BLUE);
        let entity = Entity::new(EntityType::Point(Point::new(Vector3::ZERO)), attrs);
        assert_eq!(entity.layer(), "DIM");
        assert_eq!(entity.color(), Color::BLUE);
        assert_eq!(entity.line_type(), "BYLAYER");
        assert!(entity.as_polyline().is_none());
    }
}
