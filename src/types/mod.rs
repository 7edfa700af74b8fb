//! Value types shared by entities and records

pub mod color;
pub mod line_weight;
pub mod vector;

pub use color::Color;
pub use line_weight::LineWeight;
pub use vector::Vector3;
