//! Procedural forest scene layout for the Arbor dashboard.
//!
//! Scatters a fixed number of tree and stump markers inside a diamond
//! inscribed in the scene rectangle, keeping them apart by a minimum
//! separation on a best-effort basis, and dresses the result up with
//! sprite anchors and drifting clouds.
//!
//! # Modules
//!
//! - [`diamond`] -- [`Diamond`]: the placement region and its sampling.
//! - [`layout`] -- [`LayoutRequest`] and [`place`]: bounded rejection
//!   sampling of marker positions.
//! - [`clouds`] -- Decorative cloud parameters.
//! - [`scene`] -- [`compose_scene`]: markers, sprites, and clouds from
//!   planted/cut totals.
//! - [`error`] -- [`SceneError`].
//!
//! # Randomness
//!
//! Every operation takes its random source as `&mut impl Rng`, so callers
//! choose between `rand::rng()` for variety and a seeded generator for
//! reproducible layouts. Nothing here holds state between calls.

pub mod clouds;
pub mod diamond;
pub mod error;
pub mod layout;
pub mod scene;

// Re-export primary types at crate root.
pub use clouds::scatter_clouds;
pub use diamond::Diamond;
pub use error::SceneError;
pub use layout::{DEFAULT_MAX_ATTEMPTS, LayoutRequest, place, place_seeded};
pub use scene::{SceneSettings, compose_scene, tree_fraction};
