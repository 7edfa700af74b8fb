//! Hatch header

/// The header of a HATCH.
///
/// Boundary loops and edges arrive as separate records that are accepted but
/// not assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    /// Pattern name (group 2)
    pub pattern_name: String,
    /// Solid fill (group 70 = 1)
    pub solid: bool,
    /// Number of boundary loops (group 91)
    pub loop_count: u32,
    /// Pattern angle in degrees (group 52)
    pub angle: f64,
    /// Pattern scale (group 41)
    pub scale: f64,
}

impl Hatch {
    pub fn solid() -> Self {
        Hatch {
            pattern_name: "SOLID".to_string(),
            solid: true,
            ..Self::default()
        }
    }
}

impl Default for Hatch {
    fn default() -> Self {
        Hatch {
            pattern_name: String::new(),
            solid: false,
            loop_count: 0,
            angle: 0.0,
            scale: 1.0,
        }
    }
}
