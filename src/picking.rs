//! Ray casting against the scene's pickable shapes.
//!
//! Shapes are tested in their entity's local space, so rotated orbit rings and
//! camera-facing label quads need no special casing. Because the world-to-local
//! map is affine, the ray parameter found in local space is the world distance.

use bevy::camera::CameraProjection;
use bevy::prelude::*;

use crate::error::SceneError;

/// Geometry used to hit-test an entity, expressed in its local space.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    /// Sphere centered on the origin.
    Sphere { radius: f32 },
    /// Flat ring in the local XY plane.
    Annulus { inner: f32, outer: f32 },
    /// Rectangle in the local XY plane.
    Quad { half_size: Vec2 },
}

/// A ray intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub entity: Entity,
    /// Distance from the ray origin in world units.
    pub distance: f32,
}

/// Normalized device coordinates of a cursor position.
///
/// Window coordinates grow right and down; NDC grow right and up in [-1, 1].
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        1.0 - cursor.y / window_size.y * 2.0,
    )
}

/// Unproject a point in NDC into a world-space ray starting on the near plane.
///
/// The projection supplies its own clip-from-view matrix, so custom clip
/// planes and orthographic cameras pick the same way they render.
pub fn ray_from_ndc(
    ndc: Vec2,
    camera_transform: &GlobalTransform,
    projection: &Projection,
) -> Result<Ray3d, SceneError> {
    let view_from_clip = projection.get_clip_from_view().inverse();
    let world_from_view = camera_transform.affine();

    // Reverse-Z: 1.0 is the near plane, values towards 0 recede to infinity
    let near = view_from_clip.project_point3(ndc.extend(1.0));
    let far = view_from_clip.project_point3(ndc.extend(f32::EPSILON));

    let origin = world_from_view.transform_point3(near);
    let direction = Dir3::new(world_from_view.transform_vector3(far - near))
        .map_err(|_| SceneError::DegenerateRay)?;
    Ok(Ray3d::new(origin, direction))
}

/// Distance along `ray` to `shape` placed by `transform`, if it is hit.
pub fn intersect(shape: &PickShape, transform: &GlobalTransform, ray: Ray3d) -> Option<f32> {
    let local_from_world = transform.affine().inverse();
    let origin = local_from_world.transform_point3(ray.origin);
    let dir = local_from_world.transform_vector3(*ray.direction);

    match *shape {
        PickShape::Sphere { radius } => intersect_sphere(origin, dir, radius),
        PickShape::Annulus { inner, outer } => {
            let (t, p) = intersect_xy_plane(origin, dir)?;
            let r = p.length();
            (r >= inner && r <= outer).then_some(t)
        }
        PickShape::Quad { half_size } => {
            let (t, p) = intersect_xy_plane(origin, dir)?;
            (p.x.abs() <= half_size.x && p.y.abs() <= half_size.y).then_some(t)
        }
    }
}

/// Nearest non-negative root of |o + t·d|² = r².
fn intersect_sphere(origin: Vec3, dir: Vec3, radius: f32) -> Option<f32> {
    let a = dir.length_squared();
    let b = 2.0 * origin.dot(dir);
    let c = origin.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || a == 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = (-b - sqrt_d) / (2.0 * a);
    let t_far = (-b + sqrt_d) / (2.0 * a);

    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        // Origin inside the sphere
        Some(t_far)
    } else {
        None
    }
}

/// Intersection with the z = 0 plane: ray parameter and in-plane point.
fn intersect_xy_plane(origin: Vec3, dir: Vec3) -> Option<(f32, Vec2)> {
    if dir.z.abs() < 1e-6 {
        return None;
    }
    let t = -origin.z / dir.z;
    if t < 0.0 {
        return None;
    }
    Some((t, (origin + dir * t).truncate()))
}

/// Intersect every shape and return the hits ordered nearest first.
pub fn cast_ray<'a>(
    ray: Ray3d,
    shapes: impl IntoIterator<Item = (Entity, &'a PickShape, &'a GlobalTransform)>,
) -> Vec<Hit> {
    let mut hits: Vec<Hit> = shapes
        .into_iter()
        .filter_map(|(entity, shape, transform)| {
            intersect(shape, transform, ray).map(|distance| Hit { entity, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
