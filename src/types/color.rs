//! Color representation for drawing entities

use std::fmt;

/// A color as carried by DXF group codes 62 (index) and 420 (true color).
///
/// - By layer (index 256): use the layer's color
/// - By block (index 0): use the enclosing block's color
/// - An AutoCAD Color Index (1-255)
/// - A 24-bit true color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color with RGB values
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create a color from an AutoCAD Color Index (group 62)
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            // Negative means the layer is off; the magnitude is still the color
            _ if index < 0 => Color::Index((-(index as i32)).min(255) as u8),
            _ => Color::Index(7),
        }
    }

    /// Create a true color from a packed `0x00RRGGBB` value (group 420)
    pub fn from_true_color(value: i32) -> Self {
        Color::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// The color code as written in group 62, if this is not a true color
    pub fn index(&self) -> Option<u16> {
        match self {
            Color::ByBlock => Some(0),
            Color::Index(i) => Some(*i as u16),
            Color::ByLayer => Some(256),
            Color::Rgb { .. } => None,
        }
    }

    /// Get RGB values (if applicable)
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb { r, g, b } => Some((*r, *g, *b)),
            _ => None,
        }
    }

    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "BYLAYER"),
            Color::ByBlock => write!(f, "BYBLOCK"),
            Color::Index(i) => write!(f, "{}", i),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(1), Color::Index(1));
        assert_eq!(Color::from_index(-3), Color::Index(3));
    }

    #[test]
    fn test_true_color_unpacking() {
        let color = Color::from_true_color(0x00FF8040);
        assert_eq!(color.rgb(), Some((0xFF, 0x80, 0x40)));
        assert_eq!(color.index(), None);
    }

    #[test]
    fn test_display_uses_dxf_keywords() {
        assert_eq!(Color::ByLayer.to_string(), "BYLAYER");
        assert_eq!(Color::ByBlock.to_string(), "BYBLOCK");
        assert_eq!(Color::RED.to_string(), "1");
        assert_eq!(Color::from_rgb(1, 2, 255).to_string(), "#0102FF");
    }
}
