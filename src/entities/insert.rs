//! Insert entity (block reference)

use crate::types::Vector3;

/// A reference to a block definition, optionally arrayed
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Block name (group 2)
    pub block_name: String,
    /// Insertion point (groups 10/20/30)
    pub insert_point: Vector3,
    /// Scale factors (groups 41/42/43)
    pub scale: Vector3,
    /// Rotation in degrees (group 50)
    pub rotation: f64,
    /// Column count (group 70)
    pub column_count: u16,
    /// Row count (group 71)
    pub row_count: u16,
    /// Column spacing (group 44)
    pub column_spacing: f64,
    /// Row spacing (group 45)
    pub row_spacing: f64,
}

impl Insert {
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Self {
            block_name: block_name.into(),
            insert_point,
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
        }
    }

    pub fn is_array(&self) -> bool {
        self.column_count > 1 || self.row_count > 1
    }
}

impl Default for Insert {
    fn default() -> Self {
        Insert::new("", Vector3::ZERO)
    }
}
