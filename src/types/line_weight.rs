//! Line weight representation for drawing entities

use std::fmt;

/// Line weight as carried by DXF group code 370.
///
/// Specific weights are in 1/100 mm; the negative codes select the layer's,
/// the block's or the drawing default weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LineWeight {
    /// Use the layer's line weight (-1)
    #[default]
    ByLayer,
    /// Use the block's line weight (-2)
    ByBlock,
    /// Drawing default line weight (-3)
    Default,
    /// Specific line weight in 1/100 mm
    Value(i16),
}

impl LineWeight {
    /// Create a line weight from a raw group 370 value
    pub fn from_value(value: i16) -> Self {
        match value {
            -1 => LineWeight::ByLayer,
            -2 => LineWeight::ByBlock,
            -3 => LineWeight::Default,
            v => LineWeight::Value(v),
        }
    }

    /// Get the raw value
    pub fn value(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v,
        }
    }

    /// Get the line weight in millimeters
    pub fn millimeters(&self) -> Option<f64> {
        match self {
            LineWeight::Value(v) => Some(*v as f64 / 100.0),
            _ => None,
        }
    }
}

impl fmt::Display for LineWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineWeight::ByLayer => write!(f, "BYLAYER"),
            LineWeight::ByBlock => write!(f, "BYBLOCK"),
            LineWeight::Default => write!(f, "DEFAULT"),
            LineWeight::Value(v) => write!(f, "{:.2}mm", *v as f64 / 100.0),
        }
    }
}
