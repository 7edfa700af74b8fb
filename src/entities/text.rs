//! Single-line text entity

use crate::types::Vector3;

/// Text horizontal justification (group 72)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
    /// Fit between the two alignment points, height follows
    Aligned,
    Middle,
    /// Fit between the two alignment points, height kept
    Fit,
}

impl From<i16> for TextHorizontalAlignment {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Aligned,
            4 => Self::Middle,
            5 => Self::Fit,
            _ => Self::Left,
        }
    }
}

/// Text vertical justification (group 73 on TEXT, 74 on ATTDEF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVerticalAlignment {
    #[default]
    Baseline,
    Bottom,
    Middle,
    Top,
}

impl From<i16> for TextVerticalAlignment {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Bottom,
            2 => Self::Middle,
            3 => Self::Top,
            _ => Self::Baseline,
        }
    }
}

/// A single-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Text content (group 1)
    pub value: String,
    /// First alignment point (groups 10/20/30)
    pub insertion_point: Vector3,
    /// Second alignment point (groups 11/21/31), used unless left/baseline
    pub alignment_point: Vector3,
    /// Text height (group 40)
    pub height: f64,
    /// Relative X scale (group 41)
    pub width_factor: f64,
    /// Rotation in degrees (group 50)
    pub rotation: f64,
    /// Mirroring flags (group 71): 2 = backward, 4 = upside down
    pub generation_flags: i16,
    /// Text style name (group 7)
    pub style: String,
    pub horizontal_alignment: TextHorizontalAlignment,
    pub vertical_alignment: TextVerticalAlignment,
}

impl Text {
    pub fn new() -> Self {
        Text {
            value: String::new(),
            insertion_point: Vector3::ZERO,
            alignment_point: Vector3::ZERO,
            height: 1.0,
            width_factor: 1.0,
            rotation: 0.0,
            generation_flags: 0,
            style: "STANDARD".to_string(),
            horizontal_alignment: TextHorizontalAlignment::Left,
            vertical_alignment: TextVerticalAlignment::Baseline,
        }
    }

    pub fn with_value(value: impl Into<String>, insertion_point: Vector3) -> Self {
        Text {
            value: value.into(),
            insertion_point,
            ..Self::new()
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}
