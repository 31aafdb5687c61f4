/// Extensions the directory scanner accepts. Matching is case-sensitive,
/// so `IMG.PNG` does not qualify.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Rough focal-length guess for a canonical 640x480 sensor, scaled to the
/// actual frame dimensions when no intrinsics were supplied.
pub const FOCAL_BASE: f32 = 500.0;
pub const CANONICAL_WIDTH: f32 = 640.0;
pub const CANONICAL_HEIGHT: f32 = 480.0;
