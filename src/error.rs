//! Error type for fallible scene operations.
//!
//! None of these are fatal: callers log and skip the affected step.

/// Errors raised while picking in the scene.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("pick ray is degenerate")]
    DegenerateRay,
}
