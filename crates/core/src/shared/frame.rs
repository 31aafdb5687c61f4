use image::{DynamicImage, GrayImage};

use crate::shared::intrinsics::CameraIntrinsics;

/// One decoded image together with its derived grayscale version, filename
/// stem and the intrinsics in effect when it was served.
///
/// A decode failure is represented by a 0x0 color image; callers should
/// check [`Frame::is_empty`] after every retrieval.
#[derive(Clone, Debug)]
pub struct Frame {
    image: DynamicImage,
    gray: GrayImage,
    name: String,
    intrinsics: CameraIntrinsics,
}

impl Frame {
    pub(crate) fn new(
        image: DynamicImage,
        gray: GrayImage,
        name: String,
        intrinsics: CameraIntrinsics,
    ) -> Self {
        Self {
            image,
            gray,
            name,
            intrinsics,
        }
    }

    /// Sentinel frame served when decoding fails.
    pub(crate) fn empty(name: String, intrinsics: CameraIntrinsics) -> Self {
        Self {
            image: DynamicImage::new_rgb8(0, 0),
            gray: GrayImage::new(0, 0),
            name,
            intrinsics,
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn gray(&self) -> &GrayImage {
        &self.gray
    }

    /// Filename stem of the source file: no directory, no extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intrinsics(&self) -> CameraIntrinsics {
        self.intrinsics
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }
}
