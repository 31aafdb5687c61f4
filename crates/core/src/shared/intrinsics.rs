use crate::shared::constants::{CANONICAL_HEIGHT, CANONICAL_WIDTH, FOCAL_BASE};

/// Pinhole camera intrinsics: focal lengths and optical center, always
/// fully resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraIntrinsics {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
}

/// Caller-supplied intrinsics, each value optional.
///
/// Replaces the `-1.0` sentinel convention: a legitimately negative value
/// can no longer collide with "unset".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntrinsicsHint {
    pub fx: Option<f32>,
    pub fy: Option<f32>,
    pub cx: Option<f32>,
    pub cy: Option<f32>,
}

impl IntrinsicsHint {
    /// Shared intrinsics take effect only when all four values were
    /// supplied; a partial hint resolves to `None` and per-frame defaults
    /// are derived instead.
    pub fn resolve(&self) -> Option<CameraIntrinsics> {
        Some(CameraIntrinsics {
            fx: self.fx?,
            fy: self.fy?,
            cx: self.cx?,
            cy: self.cy?,
        })
    }
}

impl CameraIntrinsics {
    /// Derives intrinsics for a frame of the given dimensions.
    ///
    /// The optical-center pair and the focal pair default independently.
    /// Without an optical center the frame center is used; without focal
    /// lengths a guess is scaled from a canonical 640x480 sensor and the
    /// two axes are averaged into a single value.
    pub fn derive(width: u32, height: u32, hint: IntrinsicsHint) -> Self {
        let (cx, cy) = match (hint.cx, hint.cy) {
            (Some(cx), Some(cy)) => (cx, cy),
            _ => (width as f32 / 2.0, height as f32 / 2.0),
        };
        let (fx, fy) = match (hint.fx, hint.fy) {
            (Some(fx), Some(fy)) => (fx, fy),
            _ => {
                let fx = FOCAL_BASE * (width as f32 / CANONICAL_WIDTH);
                let fy = FOCAL_BASE * (height as f32 / CANONICAL_HEIGHT);
                let f = (fx + fy) / 2.0;
                (f, f)
            }
        };
        Self { fx, fy, cx, cy }
    }
}
