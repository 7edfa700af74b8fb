//! Raster image reference (IMAGE)

use crate::types::Vector3;

/// A placed raster image.
///
/// The pixel data lives in the IMAGEDEF object named by `definition_handle`,
/// which is delivered separately through `link_image`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Handle of the IMAGEDEF object (group 340)
    pub definition_handle: String,
    /// Lower-left corner (groups 10/20/30)
    pub insertion_point: Vector3,
    /// One pixel along the image's U axis (groups 11/21/31)
    pub u_vector: Vector3,
    /// One pixel along the image's V axis (groups 12/22/32)
    pub v_vector: Vector3,
    /// Size in pixels (groups 13/23)
    pub width: f64,
    pub height: f64,
    /// 0-100 (group 281)
    pub brightness: u8,
    /// 0-100 (group 282)
    pub contrast: u8,
    /// 0-100 (group 283)
    pub fade: u8,
}

impl Image {
    /// Size of the placed image in drawing units
    pub fn extent(&self) -> (f64, f64) {
        (
            self.u_vector.length() * self.width,
            self.v_vector.length() * self.height,
        )
    }
}

impl Default for Image {
    fn default() -> Self {
        Image {
            definition_handle: String::new(),
            insertion_point: Vector3::ZERO,
            u_vector: Vector3::UNIT_X,
            v_vector: Vector3::new(0.0, 1.0, 0.0),
            width: 0.0,
            height: 0.0,
            brightness: 50,
            contrast: 50,
            fade: 0,
        }
    }
}
