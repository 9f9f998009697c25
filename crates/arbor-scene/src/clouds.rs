//! Decorative clouds drifting over the scene.

use arbor_types::Cloud;
use rand::Rng;

/// Cloud widths are drawn from `[50, 150)` pixels.
const CLOUD_WIDTH_PX: (f64, f64) = (50.0, 150.0);
/// Clouds start anywhere across the scene.
const CLOUD_LEFT_PCT: (f64, f64) = (0.0, 100.0);
/// Clouds keep to the upper part of the sky.
const CLOUD_TOP_PCT: (f64, f64) = (10.0, 70.0);
/// One drift across the scene takes one to two minutes.
const DRIFT_SECS: (f64, f64) = (60.0, 120.0);
/// One vertical bob takes five to fifteen seconds.
const BOB_SECS: (f64, f64) = (5.0, 15.0);

/// Scatter `count` clouds with random size, position, and timing.
pub fn scatter_clouds(count: usize, rng: &mut impl Rng) -> Vec<Cloud> {
    (0..count)
        .map(|_| {
            let width_px = rng.random_range(CLOUD_WIDTH_PX.0..CLOUD_WIDTH_PX.1);
            Cloud {
                width_px,
                height_px: width_px / 2.0,
                left_pct: rng.random_range(CLOUD_LEFT_PCT.0..CLOUD_LEFT_PCT.1),
                top_pct: rng.random_range(CLOUD_TOP_PCT.0..CLOUD_TOP_PCT.1),
                drift_secs: rng.random_range(DRIFT_SECS.0..DRIFT_SECS.1),
                bob_secs: rng.random_range(BOB_SECS.0..BOB_SECS.1),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn clouds_stay_within_ranges() {
        let mut rng = SmallRng::seed_from_u64(11);
        let clouds = scatter_clouds(200, &mut rng);
        assert_eq!(clouds.len(), 200);
        for cloud in &clouds {
            assert!((50.0..150.0).contains(&cloud.width_px));
            assert!((cloud.height_px * 2.0 - cloud.width_px).abs() < 1e-9);
            assert!((0.0..100.0).contains(&cloud.left_pct));
            assert!((10.0..70.0).contains(&cloud.top_pct));
            assert!((60.0..120.0).contains(&cloud.drift_secs));
            assert!((5.0..15.0).contains(&cloud.bob_secs));
        }
    }

    #[test]
    fn no_clouds() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(scatter_clouds(0, &mut rng).is_empty());
    }
}
