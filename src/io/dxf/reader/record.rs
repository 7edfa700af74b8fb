//! A record buffered up to the next `0` group

use super::stream_reader::DxfCodePair;
use crate::attributes::Attributes;
use crate::events::XValue;
use crate::types::{Color, LineWeight, Vector3};

/// Record name plus every pair that followed it
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub name: String,
    pub pairs: Vec<DxfCodePair>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            pairs: Vec::new(),
        }
    }

    /// First pair with the code, ignoring extended data
    fn first(&self, code: i32) -> Option<&DxfCodePair> {
        self.body().iter().find(|p| p.code == code)
    }

    /// Pairs before the first 1001 group
    pub fn body(&self) -> &[DxfCodePair] {
        let end = self
            .pairs
            .iter()
            .position(|p| p.code == 1001)
            .unwrap_or(self.pairs.len());
        &self.pairs[..end]
    }

    /// Pairs from the first 1001 group on
    pub fn extended_data(&self) -> &[DxfCodePair] {
        &self.pairs[self.body().len()..]
    }

    pub fn string(&self, code: i32) -> Option<&str> {
        self.first(code).map(|p| p.as_str())
    }

    pub fn string_or(&self, code: i32, default: &str) -> String {
        self.string(code).unwrap_or(default).to_string()
    }

    pub fn double(&self, code: i32) -> Option<f64> {
        self.first(code).and_then(|p| p.as_double())
    }

    pub fn double_or(&self, code: i32, default: f64) -> f64 {
        self.double(code).unwrap_or(default)
    }

    pub fn int(&self, code: i32) -> Option<i64> {
        self.first(code).and_then(|p| p.as_int())
    }

    pub fn i16_or(&self, code: i32, default: i16) -> i16 {
        self.first(code).and_then(|p| p.as_i16()).unwrap_or(default)
    }

    /// Count groups are never negative
    pub fn count(&self, code: i32) -> usize {
        self.int(code)
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(0)
    }

    /// Point from the x code and its y (+10) and z (+20) companions
    pub fn point(&self, code: i32) -> Vector3 {
        Vector3::new(
            self.double_or(code, 0.0),
            self.double_or(code + 10, 0.0),
            self.double_or(code + 20, 0.0),
        )
    }

    pub fn has(&self, code: i32) -> bool {
        self.first(code).is_some()
    }

    /// Presentation attributes carried by an entity record
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::with_layer(self.string_or(8, "0"));
        if let Some(line_type) = self.string(6) {
            attributes.line_type = line_type.to_string();
        }
        if let Some(index) = self.first(62).and_then(|p| p.as_i16()) {
            attributes.color = Color::from_index(index);
        }
        if let Some(rgb) = self.first(420).and_then(|p| p.as_i32()) {
            attributes.color = Color::from_true_color(rgb);
        }
        if let Some(weight) = self.first(370).and_then(|p| p.as_i16()) {
            attributes.line_weight = LineWeight::from_value(weight);
        }
        attributes
    }
}

/// Points whose x group repeats, each completed by its y and z groups
pub fn point_list(pairs: &[DxfCodePair], code: i32) -> Vec<Vector3> {
    let mut points: Vec<Vector3> = Vec::new();
    for pair in pairs {
        let Some(value) = pair.as_double() else {
            continue;
        };
        if pair.code == code {
            points.push(Vector3::new(value, 0.0, 0.0));
        } else if let Some(last) = points.last_mut() {
            if pair.code == code + 10 {
                last.y = value;
            } else if pair.code == code + 20 {
                last.z = value;
            }
        }
    }
    points
}

/// Typed value of an XRECORD or extended data pair
pub fn x_value(pair: &DxfCodePair) -> XValue {
    if let Some(b) = pair.as_bool() {
        XValue::Bool(b)
    } else if let Some(d) = pair.as_double() {
        XValue::Real(d)
    } else if let Some(i) = pair.as_int() {
        XValue::Int(i)
    } else {
        XValue::String(pair.value_string.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(i32, &str)]) -> Record {
        Record {
            name: "TEST".into(),
            pairs: pairs.iter().map(|&(c, v)| DxfCodePair::new(c, v)).collect(),
        }
    }

    #[test]
    fn test_attributes_default_by_layer() {
        let rec = record(&[(10, "1.0")]);
        assert_eq!(rec.attributes(), Attributes::default());
    }

    #[test]
    fn test_true_color_overrides_index() {
        let rec = record(&[(8, "WALLS"), (62, "1"), (420, "16711935"), (370, "50")]);
        let attrs = rec.attributes();
        assert_eq!(attrs.layer, "WALLS");
        assert_eq!(attrs.color, Color::from_rgb(255, 0, 255));
        assert_eq!(attrs.line_weight, LineWeight::Value(50));
    }

    #[test]
    fn test_extended_data_is_split_off() {
        let rec = record(&[(10, "1"), (1001, "APP"), (1000, "x"), (10, "9")]);
        assert_eq!(rec.body().len(), 1);
        assert_eq!(rec.extended_data().len(), 3);
        assert_eq!(rec.point(10), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_point_list() {
        let rec = record(&[(10, "1"), (20, "2"), (42, "0.5"), (10, "3"), (20, "4"), (30, "5")]);
        let points = point_list(&rec.pairs, 10);
        assert_eq!(points, vec![Vector3::new(1.0, 2.0, 0.0), Vector3::new(3.0, 4.0, 5.0)]);
    }
}
