//! Multi-line text entity

use crate::types::Vector3;

/// Attachment point for MText (group 71)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentPoint {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl From<i16> for AttachmentPoint {
    fn from(value: i16) -> Self {
        match value {
            2 => Self::TopCenter,
            3 => Self::TopRight,
            4 => Self::MiddleLeft,
            5 => Self::MiddleCenter,
            6 => Self::MiddleRight,
            7 => Self::BottomLeft,
            8 => Self::BottomCenter,
            9 => Self::BottomRight,
            _ => Self::TopLeft,
        }
    }
}

/// Drawing direction for MText (group 72)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingDirection {
    #[default]
    LeftToRight,
    TopToBottom,
    ByStyle,
}

impl From<i16> for DrawingDirection {
    fn from(value: i16) -> Self {
        match value {
            3 => Self::TopToBottom,
            5 => Self::ByStyle,
            _ => Self::LeftToRight,
        }
    }
}

/// A multi-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    /// Full text, chunks (group 3) followed by the tail (group 1)
    pub value: String,
    /// Insertion point (groups 10/20/30)
    pub insertion_point: Vector3,
    /// X-axis direction (groups 11/21/31)
    pub direction: Vector3,
    /// Nominal text height (group 40)
    pub height: f64,
    /// Reference rectangle width (group 41)
    pub rectangle_width: f64,
    pub attachment_point: AttachmentPoint,
    pub drawing_direction: DrawingDirection,
    /// 1 = at least, 2 = exact (group 73)
    pub line_spacing_style: i16,
    /// Line spacing factor (group 44)
    pub line_spacing_factor: f64,
    /// Text style name (group 7)
    pub style: String,
    /// Rotation in degrees (group 50)
    pub rotation: f64,
}

impl MText {
    pub fn new() -> Self {
        MText {
            value: String::new(),
            insertion_point: Vector3::ZERO,
            direction: Vector3::UNIT_X,
            height: 1.0,
            rectangle_width: 0.0,
            attachment_point: AttachmentPoint::TopLeft,
            drawing_direction: DrawingDirection::LeftToRight,
            line_spacing_style: 1,
            line_spacing_factor: 1.0,
            style: "STANDARD".to_string(),
            rotation: 0.0,
        }
    }
}

impl Default for MText {
    fn default() -> Self {
        Self::new()
    }
}
