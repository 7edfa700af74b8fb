//! Reading drawings from DXF files

pub mod dxf;

pub use dxf::{DxfReader, DxfReaderConfiguration};
