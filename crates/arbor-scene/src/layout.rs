//! Marker placement by bounded rejection sampling.
//!
//! Each slot is placed in turn. A candidate is drawn uniformly from the
//! bounding rectangle and accepted when it lies inside the diamond and is
//! at least `min_separation` (straight-line distance) from every marker
//! placed so far. After `max_attempts` draws the slot gives up on
//! separation, so the layout always terminates with exactly `total_slots`
//! markers.
//!
//! # Fallback
//!
//! A slot that exhausts its attempts takes the last candidate that landed
//! inside the diamond, not simply the last candidate drawn: a draw from the
//! rectangle corners would otherwise break containment. When no draw
//! landed inside at all, the slot takes the diamond center. Center
//! fallbacks are not separated from each other, so several markers can
//! stack on the exact same point.
//!
//! The first `tree_count` markers are trees; the rest are stumps.

use arbor_types::{MarkerKind, MarkerPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::diamond::Diamond;
use crate::error::SceneError;

/// Candidate draws per slot before separation is given up on.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Parameters of one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    /// Number of markers to place.
    pub total_slots: usize,
    /// Share of markers drawn as trees, in `[0, 1]`.
    pub tree_fraction: f64,
    /// Scene rectangle width.
    pub width: f64,
    /// Scene rectangle height.
    pub height: f64,
    /// Desired minimum distance between any two markers.
    pub min_separation: f64,
    /// Candidate draws per slot.
    pub max_attempts: u32,
}

impl LayoutRequest {
    /// A request with the default attempt bound.
    pub const fn new(
        total_slots: usize,
        tree_fraction: f64,
        width: f64,
        height: f64,
        min_separation: f64,
    ) -> Self {
        Self {
            total_slots,
            tree_fraction,
            width,
            height,
            min_separation,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Check every parameter before any sampling happens.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidArgument`] naming the first bad parameter.
    pub fn validate(&self) -> Result<(), SceneError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("min_separation", self.min_separation)?;
        if !(0.0..=1.0).contains(&self.tree_fraction) {
            return Err(SceneError::invalid(
                "tree_fraction",
                format!("must be within [0, 1], got {}", self.tree_fraction),
            ));
        }
        if self.max_attempts == 0 {
            return Err(SceneError::invalid("max_attempts", "must be at least 1"));
        }
        Ok(())
    }

    /// Number of markers labeled as trees: `round(total * fraction)`,
    /// clamped to `[0, total_slots]`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )] // Slot counts are small; the product is clamped to [0, total] before the cast.
    pub fn tree_count(&self) -> usize {
        let total = self.total_slots as f64;
        let trees = (total * self.tree_fraction).round().clamp(0.0, total);
        (trees as usize).min(self.total_slots)
    }
}

/// Place `request.total_slots` markers using `rng`.
///
/// # Errors
///
/// Returns [`SceneError::InvalidArgument`] if the request fails
/// [`LayoutRequest::validate`]. Crowding is never an error.
pub fn place(request: &LayoutRequest, rng: &mut impl Rng) -> Result<Vec<MarkerPoint>, SceneError> {
    request.validate()?;

    let diamond = Diamond::inscribed(request.width, request.height);
    let min_distance_sq = request.min_separation * request.min_separation;
    let tree_count = request.tree_count();

    let mut placed: Vec<(f64, f64)> = Vec::with_capacity(request.total_slots);
    for _ in 0..request.total_slots {
        let point = place_one(&diamond, &placed, min_distance_sq, request.max_attempts, rng);
        placed.push(point);
    }

    Ok(placed
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| MarkerPoint {
            x,
            y,
            kind: if i < tree_count {
                MarkerKind::Tree
            } else {
                MarkerKind::Stump
            },
        })
        .collect())
}

/// Deterministic [`place`]: the same request and seed give the same layout.
///
/// # Errors
///
/// Same as [`place`].
pub fn place_seeded(request: &LayoutRequest, seed: u64) -> Result<Vec<MarkerPoint>, SceneError> {
    let mut rng = StdRng::seed_from_u64(seed);
    place(request, &mut rng)
}

/// Draw candidates for one slot until one is acceptable or attempts run out.
fn place_one(
    diamond: &Diamond,
    placed: &[(f64, f64)],
    min_distance_sq: f64,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> (f64, f64) {
    let mut fallback = None;
    for _ in 0..max_attempts {
        let (x, y) = diamond.sample_bounds(rng);
        if !diamond.contains(x, y) {
            continue;
        }
        if is_clear(placed, x, y, min_distance_sq) {
            return (x, y);
        }
        fallback = Some((x, y));
    }
    // Half the rectangle lies outside the diamond, so a run of misses is
    // possible but vanishingly rare; the center keeps the marker inside.
    fallback.unwrap_or_else(|| diamond.center())
}

fn is_clear(placed: &[(f64, f64)], x: f64, y: f64, min_distance_sq: f64) -> bool {
    placed.iter().all(|&(px, py)| {
        let dx = px - x;
        let dy = py - y;
        dx.mul_add(dx, dy * dy) >= min_distance_sq
    })
}

fn positive(name: &'static str, value: f64) -> Result<(), SceneError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid(
            name,
            format!("must be positive and finite, got {value}"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::SmallRng;

    use super::*;

    fn count_kind(points: &[MarkerPoint], kind: MarkerKind) -> usize {
        points.iter().filter(|p| p.kind == kind).count()
    }

    #[test]
    fn sixty_slots_half_trees() {
        let request = LayoutRequest::new(60, 0.5, 1000.0, 500.0, 40.0);
        let mut rng = SmallRng::seed_from_u64(42);
        let points = place(&request, &mut rng).unwrap();

        assert_eq!(points.len(), 60);
        assert_eq!(count_kind(&points, MarkerKind::Tree), 30);
        assert_eq!(count_kind(&points, MarkerKind::Stump), 30);

        let diamond = Diamond::inscribed(1000.0, 500.0);
        assert!(points.iter().all(|p| diamond.contains(p.x, p.y)));
    }

    #[test]
    fn trees_come_first() {
        let request = LayoutRequest::new(10, 0.3, 400.0, 400.0, 10.0);
        let points = place_seeded(&request, 1).unwrap();
        let kinds: Vec<MarkerKind> = points.iter().map(|p| p.kind).collect();
        assert_eq!(&kinds[..3], &[MarkerKind::Tree; 3]);
        assert!(kinds[3..].iter().all(|k| *k == MarkerKind::Stump));
    }

    #[test]
    fn sparse_layout_respects_separation() {
        let request = LayoutRequest::new(8, 1.0, 1000.0, 1000.0, 50.0);
        let points = place_seeded(&request, 9).unwrap();
        for (i, a) in points.iter().enumerate() {
            for b in points.iter().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                assert!(distance >= 50.0, "markers {distance} apart");
            }
        }
    }

    #[test]
    fn crowded_layout_still_fills_every_slot() {
        // The separation is larger than the whole diamond.
        let request = LayoutRequest::new(25, 0.4, 100.0, 60.0, 500.0);
        let points = place_seeded(&request, 3).unwrap();
        assert_eq!(points.len(), 25);
        let diamond = Diamond::inscribed(100.0, 60.0);
        assert!(points.iter().all(|p| diamond.contains(p.x, p.y)));
    }

    #[test]
    fn seeded_layouts_are_reproducible() {
        let request = LayoutRequest::new(30, 0.7, 800.0, 400.0, 30.0);
        let a = place_seeded(&request, 2024).unwrap();
        let b = place_seeded(&request, 2024).unwrap();
        let c = place_seeded(&request, 2025).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    /// Always yields zero bits, so every draw hits the rectangle's
    /// top-left corner, outside the diamond.
    struct CornerRng;

    impl rand::RngCore for CornerRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn slots_with_no_inside_draw_stack_on_the_center() {
        let request = LayoutRequest::new(4, 0.5, 200.0, 100.0, 10.0);
        let points = place(&request, &mut CornerRng).unwrap();

        assert_eq!(points.len(), 4);
        for p in &points {
            assert!((p.x - 100.0).abs() < f64::EPSILON);
            assert!((p.y - 50.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn tree_count_rounds_and_clamps() {
        assert_eq!(LayoutRequest::new(60, 0.5, 1.0, 1.0, 1.0).tree_count(), 30);
        assert_eq!(LayoutRequest::new(3, 0.5, 1.0, 1.0, 1.0).tree_count(), 2);
        assert_eq!(LayoutRequest::new(7, 1.0, 1.0, 1.0, 1.0).tree_count(), 7);
        assert_eq!(LayoutRequest::new(7, 0.0, 1.0, 1.0, 1.0).tree_count(), 0);
        assert_eq!(LayoutRequest::new(0, 0.5, 1.0, 1.0, 1.0).tree_count(), 0);
    }

    #[test]
    fn zero_slots_is_empty() {
        let request = LayoutRequest::new(0, 0.5, 10.0, 10.0, 1.0);
        assert_eq!(place_seeded(&request, 0).map(|p| p.len()).ok(), Some(0));
    }

    #[test]
    fn invalid_arguments_fail_fast() {
        let base = LayoutRequest::new(10, 0.5, 100.0, 100.0, 5.0);
        let cases = [
            ("width", LayoutRequest { width: -1.0, ..base }),
            ("height", LayoutRequest { height: 0.0, ..base }),
            ("width", LayoutRequest { width: f64::NAN, ..base }),
            ("min_separation", LayoutRequest { min_separation: 0.0, ..base }),
            ("tree_fraction", LayoutRequest { tree_fraction: 1.5, ..base }),
            ("tree_fraction", LayoutRequest { tree_fraction: f64::NAN, ..base }),
            ("max_attempts", LayoutRequest { max_attempts: 0, ..base }),
        ];
        for (expected, request) in cases {
            let result = place_seeded(&request, 0);
            assert!(
                matches!(result, Err(SceneError::InvalidArgument { name, .. }) if name == expected),
                "expected {expected} to be rejected"
            );
        }
    }
}
