//! Presentation attributes in effect when an entity is created

use crate::types::{Color, LineWeight};

/// Layer, line type, color and line weight.
///
/// The assembler holds one current value, replaced whenever the scanner
/// issues [`EventReceiver::set_attributes`]. Every finished entity owns its
/// own copy taken at creation time.
///
/// [`EventReceiver::set_attributes`]: crate::events::EventReceiver::set_attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    /// Layer name (group 8)
    pub layer: String,
    /// Line type name (group 6)
    pub line_type: String,
    /// Color (groups 62 / 420)
    pub color: Color,
    /// Line weight (group 370)
    pub line_weight: LineWeight,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            layer: "0".to_string(),
            line_type: "BYLAYER".to_string(),
            color: Color::ByLayer,
            line_weight: LineWeight::ByLayer,
        }
    }

    /// Attributes on a named layer with everything else by layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        Attributes {
            layer: layer.into(),
            ..Self::new()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_type(mut self, line_type: impl Into<String>) -> Self {
        self.line_type = line_type.into();
        self
    }

    pub fn with_line_weight(mut self, line_weight: LineWeight) -> Self {
        self.line_weight = line_weight;
        self
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}
