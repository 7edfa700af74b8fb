//! Error types for dxf-assembler

use std::io;
use thiserror::Error;

/// Main error type for reading drawings.
///
/// Event handling itself never fails; these errors come from opening and
/// tokenizing the source.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed group code / value line pair
    #[error("Parse error: {0}")]
    Parse(String),

    /// Group code outside the DXF range
    #[error("Invalid DXF code: {0}")]
    InvalidDxfCode(i32),

    /// Input that is not an ASCII DXF stream
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxf-assembler operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}
