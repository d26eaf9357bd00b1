//! Test utilities for scene and picking tests.
//!
//! Provides camera fixtures matching the scene's starting view and a few
//! assertions over rotations.

use bevy::prelude::*;

/// Fixtures for building test cameras and bodies.
pub mod fixtures {
    use super::*;
    use crate::camera::{CAMERA_FAR, CAMERA_FOV, CAMERA_NEAR, CAMERA_START};

    /// Camera at the starting position looking at the origin, 4:3 aspect.
    pub fn default_camera() -> (GlobalTransform, Projection) {
        camera_at(CAMERA_START)
    }

    /// Camera at `eye` looking at the origin, 4:3 aspect.
    pub fn camera_at(eye: Vec3) -> (GlobalTransform, Projection) {
        let transform = Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y);
        let projection = Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV,
            aspect_ratio: 4.0 / 3.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        });
        (GlobalTransform::from(transform), projection)
    }
}

/// Assertions over orientations.
pub mod assertions {
    use super::*;

    /// Assert two rotations describe the same orientation (q and -q are equal).
    pub fn assert_same_rotation(a: Quat, b: Quat, epsilon: f32) {
        let dot = a.dot(b).abs();
        assert!(
            (1.0 - dot) < epsilon,
            "rotations differ: {a:?} vs {b:?} (|dot| = {dot})"
        );
    }
}
