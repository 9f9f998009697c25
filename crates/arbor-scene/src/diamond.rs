//! The diamond-shaped placement region.
//!
//! A diamond (a square rotated 45 degrees, stretched to the rectangle's
//! aspect ratio) is inscribed in a `width x height` rectangle whose top-left
//! corner is the origin. A point is inside when
//!
//! ```text
//! |x - cx| / (width / 2) + |y - cy| / (height / 2) <= 1
//! ```

use rand::Rng;

/// A diamond inscribed in an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    /// Horizontal center.
    cx: f64,
    /// Vertical center.
    cy: f64,
    /// Half the rectangle width.
    half_width: f64,
    /// Half the rectangle height.
    half_height: f64,
}

impl Diamond {
    /// The diamond inscribed in a `width x height` rectangle at the origin.
    ///
    /// Dimensions are assumed positive and finite; callers validate first.
    pub fn inscribed(width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self {
            cx: half_width,
            cy: half_height,
            half_width,
            half_height,
        }
    }

    /// Center of the diamond, which is also the rectangle center.
    pub const fn center(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    /// Whether `(x, y)` lies inside the diamond or on its edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.cx).abs() / self.half_width + (y - self.cy).abs() / self.half_height <= 1.0
    }

    /// A uniformly random point in the bounding rectangle.
    pub fn sample_bounds(&self, rng: &mut impl Rng) -> (f64, f64) {
        let dx: f64 = rng.random_range(-1.0..=1.0);
        let dy: f64 = rng.random_range(-1.0..=1.0);
        (
            dx.mul_add(self.half_width, self.cx),
            dy.mul_add(self.half_height, self.cy),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn center_and_vertices_are_inside() {
        let d = Diamond::inscribed(1000.0, 500.0);
        assert_eq!(d.center(), (500.0, 250.0));
        assert!(d.contains(500.0, 250.0));
        assert!(d.contains(0.0, 250.0));
        assert!(d.contains(1000.0, 250.0));
        assert!(d.contains(500.0, 0.0));
        assert!(d.contains(500.0, 500.0));
    }

    #[test]
    fn rectangle_corners_are_outside() {
        let d = Diamond::inscribed(1000.0, 500.0);
        assert!(!d.contains(0.0, 0.0));
        assert!(!d.contains(1000.0, 500.0));
        assert!(!d.contains(10.0, 490.0));
        assert!(!d.contains(990.0, 10.0));
    }

    #[test]
    fn edge_midpoint_is_inside() {
        let d = Diamond::inscribed(200.0, 100.0);
        // Halfway along the edge from (0, 50) to (100, 0).
        assert!(d.contains(50.0, 25.0));
        assert!(!d.contains(49.0, 24.0));
    }

    #[test]
    fn samples_stay_in_bounds() {
        let d = Diamond::inscribed(300.0, 120.0);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let (x, y) = d.sample_bounds(&mut rng);
            assert!((0.0..=300.0).contains(&x));
            assert!((0.0..=120.0).contains(&y));
        }
    }
}
