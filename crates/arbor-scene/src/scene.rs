//! The full forest scene: markers, sprites, and clouds.
//!
//! The tree/stump mix mirrors the recorded history: the more trees were
//! cut relative to those planted, the more stumps the scene shows.

use arbor_types::{ForestScene, MarkerKind, MarkerPoint, Sprite};
use rand::Rng;

use crate::clouds::scatter_clouds;
use crate::error::SceneError;
use crate::layout::{DEFAULT_MAX_ATTEMPTS, LayoutRequest, place};

/// Tree sprite box (width, height) in pixels.
const TREE_BOX: (f64, f64) = (40.0, 80.0);
/// Stump sprite box (width, height) in pixels.
const STUMP_BOX: (f64, f64) = (30.0, 30.0);
/// Trees are drawn at a random scale in this range.
const TREE_SCALE: (f64, f64) = (0.8, 1.2);

/// Scene dimensions and density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    /// Markers in the scene, trees and stumps together.
    pub total_slots: usize,
    /// Scene width in pixels.
    pub width: f64,
    /// Scene height in pixels.
    pub height: f64,
    /// Desired minimum distance between markers.
    pub min_separation: f64,
    /// Candidate draws per marker.
    pub max_attempts: u32,
    /// Background clouds.
    pub cloud_count: usize,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            total_slots: 60,
            width: 1000.0,
            height: 500.0,
            min_separation: 40.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            cloud_count: 10,
        }
    }
}

/// Share of scene markers drawn as trees for the given totals.
///
/// `1 - cut / max(planted, 1)`, clamped to `[0, 1]`.
#[allow(clippy::cast_precision_loss)] // Tree counts stay far below 2^53.
pub fn tree_fraction(planted: u64, cut: u64) -> f64 {
    let planted = planted.max(1) as f64;
    (1.0 - cut as f64 / planted).clamp(0.0, 1.0)
}

/// Lay out the scene for `planted`/`cut` totals.
///
/// # Errors
///
/// Returns [`SceneError::InvalidArgument`] if the settings describe an
/// invalid layout.
pub fn compose_scene(
    planted: u64,
    cut: u64,
    settings: &SceneSettings,
    rng: &mut impl Rng,
) -> Result<ForestScene, SceneError> {
    let request = LayoutRequest {
        total_slots: settings.total_slots,
        tree_fraction: tree_fraction(planted, cut),
        width: settings.width,
        height: settings.height,
        min_separation: settings.min_separation,
        max_attempts: settings.max_attempts,
    };
    let markers = place(&request, rng)?;

    let sprites = markers
        .into_iter()
        .map(|marker| sprite_for(marker, rng))
        .collect();

    Ok(ForestScene {
        width: settings.width,
        height: settings.height,
        sprites,
        clouds: scatter_clouds(settings.cloud_count, rng),
    })
}

/// Anchor a sprite box centered on the marker.
fn sprite_for(marker: MarkerPoint, rng: &mut impl Rng) -> Sprite {
    let ((box_width, box_height), scale) = match marker.kind {
        MarkerKind::Tree => (TREE_BOX, rng.random_range(TREE_SCALE.0..TREE_SCALE.1)),
        MarkerKind::Stump => (STUMP_BOX, 1.0),
    };
    Sprite {
        marker,
        left: marker.x - box_width / 2.0,
        top: marker.y - box_height / 2.0,
        scale,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn fraction_from_totals() {
        assert!((tree_fraction(100, 0) - 1.0).abs() < f64::EPSILON);
        assert!((tree_fraction(100, 25) - 0.75).abs() < f64::EPSILON);
        assert!(tree_fraction(10, 40).abs() < f64::EPSILON);
        // No plantings: any cut wipes the forest; nothing at all keeps it whole.
        assert!(tree_fraction(0, 1).abs() < f64::EPSILON);
        assert!((tree_fraction(0, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scene_mix_follows_history() {
        let mut rng = SmallRng::seed_from_u64(5);
        let scene = compose_scene(100, 25, &SceneSettings::default(), &mut rng).unwrap();
        assert_eq!(scene.sprites.len(), 60);
        assert_eq!(scene.clouds.len(), 10);
        let trees = scene
            .sprites
            .iter()
            .filter(|s| s.marker.kind == MarkerKind::Tree)
            .count();
        assert_eq!(trees, 45);
    }

    #[test]
    fn sprites_are_centered_on_markers() {
        let mut rng = SmallRng::seed_from_u64(8);
        let tree = MarkerPoint {
            x: 100.0,
            y: 200.0,
            kind: MarkerKind::Tree,
        };
        let sprite = sprite_for(tree, &mut rng);
        assert!((sprite.left - 80.0).abs() < f64::EPSILON);
        assert!((sprite.top - 160.0).abs() < f64::EPSILON);
        assert!((0.8..1.2).contains(&sprite.scale));

        let stump = MarkerPoint {
            kind: MarkerKind::Stump,
            ..tree
        };
        let sprite = sprite_for(stump, &mut rng);
        assert!((sprite.left - 85.0).abs() < f64::EPSILON);
        assert!((sprite.top - 185.0).abs() < f64::EPSILON);
        assert!((sprite.scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let settings = SceneSettings {
            width: 0.0,
            ..SceneSettings::default()
        };
        assert!(compose_scene(1, 0, &settings, &mut rng).is_err());
    }
}
