//! Error types for the `arbor-scene` crate.

/// Errors that can occur while laying out a scene.
///
/// Layout never fails once its inputs are valid; these are raised before
/// any sampling begins.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A numeric parameter is out of range, infinite, or NaN.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl SceneError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
