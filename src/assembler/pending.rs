//! In-progress composite entities

use crate::attributes::Attributes;
use crate::entities::{ControlPoint, Entity, EntityType, Polyline, Spline, Vertex};
use crate::events::{PolylineBegin, SplineBegin};
use crate::types::Vector3;

/// The sequence of a composite that had no room for another item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Full {
    pub declared: usize,
}

/// A polyline still collecting vertices, with the attributes of its header
#[derive(Debug, Clone)]
pub(crate) struct PendingPolyline {
    polyline: Polyline,
    attributes: Attributes,
}

impl PendingPolyline {
    pub fn begin(header: PolylineBegin, attributes: Attributes) -> Self {
        PendingPolyline {
            polyline: Polyline::new(header.vertex_count, header.flags, header.elevation),
            attributes,
        }
    }

    pub fn push(&mut self, vertex: Vertex) -> Result<(), Full> {
        if self.polyline.is_complete() {
            return Err(Full {
                declared: self.polyline.declared_vertex_count,
            });
        }
        self.polyline.vertices.push(vertex);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.polyline.is_complete()
    }

    pub fn progress(&self) -> String {
        format!(
            "{} of {} vertices",
            self.polyline.vertices.len(),
            self.polyline.declared_vertex_count
        )
    }

    pub fn into_entity(self) -> Entity {
        Entity::new(EntityType::Polyline(self.polyline), self.attributes)
    }
}

/// A spline still collecting knots, control points and fit points
#[derive(Debug, Clone)]
pub(crate) struct PendingSpline {
    spline: Spline,
    attributes: Attributes,
}

impl PendingSpline {
    pub fn begin(header: SplineBegin, attributes: Attributes) -> Self {
        PendingSpline {
            spline: Spline::new(
                header.degree,
                header.flags,
                header.knot_count,
                header.control_point_count,
                header.fit_point_count,
            ),
            attributes,
        }
    }

    pub fn push_knot(&mut self, knot: f64) -> Result<(), Full> {
        let s = &mut self.spline;
        push_bounded(&mut s.knots, s.declared_knot_count, knot)
    }

    pub fn push_control_point(&mut self, control_point: ControlPoint) -> Result<(), Full> {
        let s = &mut self.spline;
        push_bounded(
            &mut s.control_points,
            s.declared_control_point_count,
            control_point,
        )
    }

    pub fn push_fit_point(&mut self, fit_point: Vector3) -> Result<(), Full> {
        let s = &mut self.spline;
        push_bounded(&mut s.fit_points, s.declared_fit_point_count, fit_point)
    }

    pub fn is_complete(&self) -> bool {
        self.spline.is_complete()
    }

    pub fn progress(&self) -> String {
        let s = &self.spline;
        format!(
            "{}/{} knots, {}/{} control points, {}/{} fit points",
            s.knots.len(),
            s.declared_knot_count,
            s.control_points.len(),
            s.declared_control_point_count,
            s.fit_points.len(),
            s.declared_fit_point_count
        )
    }

    pub fn into_entity(self) -> Entity {
        Entity::new(EntityType::Spline(self.spline), self.attributes)
    }
}

fn push_bounded<T>(items: &mut Vec<T>, declared: usize, item: T) -> Result<(), Full> {
    if items.len() >= declared {
        return Err(Full { declared });
    }
    items.push(item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_refuses_vertex_past_declared_count() {
        let mut p = PendingPolyline::begin(PolylineBegin::new(1), Attributes::default());
        assert!(p.push(Vertex::default()).is_ok());
        assert_eq!(p.push(Vertex::default()), Err(Full { declared: 1 }));
        assert_eq!(p.progress(), "1 of 1 vertices");
    }

    #[test]
    fn test_spline_sequences_fill_independently() {
        let mut s = PendingSpline::begin(SplineBegin::new(1, 2, 1, 0), Attributes::default());
        assert!(s.push_control_point(ControlPoint::new(Vector3::ZERO)).is_ok());
        assert!(s.push_control_point(ControlPoint::new(Vector3::ZERO)).is_err());
        assert!(s.push_fit_point(Vector3::ZERO).is_err());
        assert!(s.push_knot(0.0).is_ok());
        assert!(!s.is_complete());
        assert!(s.push_knot(1.0).is_ok());
        assert!(s.is_complete());
        assert_eq!(s.progress(), "2/2 knots, 1/1 control points, 0/0 fit points");
    }
}
