/// Axis-aligned bounding box in pixel coordinates.
///
/// Annotation files store corner pairs; boxes are kept as origin plus
/// extent, so `width = max_x - min_x` and `height = max_y - min_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_corners() {
        let b = BoundingBox::from_corners(10.0, 20.0, 110.0, 170.0);
        assert_relative_eq!(b.min_x, 10.0);
        assert_relative_eq!(b.min_y, 20.0);
        assert_relative_eq!(b.width, 100.0);
        assert_relative_eq!(b.height, 150.0);
    }

    #[test]
    fn test_corner_round_trip() {
        let b = BoundingBox::from_corners(1.5, 2.5, 4.0, 8.0);
        assert_relative_eq!(b.max_x(), 4.0);
        assert_relative_eq!(b.max_y(), 8.0);
    }

    #[test]
    fn test_degenerate_box() {
        let b = BoundingBox::from_corners(5.0, 5.0, 5.0, 5.0);
        assert_relative_eq!(b.width, 0.0);
        assert_relative_eq!(b.height, 0.0);
    }
}
