//! Per-tick update of the running scene.
//!
//! Each frame while the scene runs: bodies spin, orbit pivots turn, glow
//! shells are re-aimed at the camera and labels are turned to face it. Spin
//! and orbit angles are accumulators advanced by a fixed amount per tick, so
//! every body moves independently of the others.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::catalog::BodyId;
use crate::render::{BodyLabel, GlowShell};
use crate::types::{GalaxyPhase, SceneClock, TickSystemSet};

/// Plugin driving the per-tick update.
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .configure_sets(
                Update,
                (
                    TickSystemSet::Motion.run_if(SceneClock::is_running),
                    TickSystemSet::ViewDependent,
                )
                    .chain()
                    .run_if(in_state(GalaxyPhase::Running)),
            )
            .add_systems(
                Update,
                (
                    (advance_clock, spin_bodies, revolve_orbits).in_set(TickSystemSet::Motion),
                    (aim_glow_shells, orient_labels).in_set(TickSystemSet::ViewDependent),
                ),
            );
    }
}

/// Self-rotation about the local Y axis.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub angle: f32,
    /// Radians per tick.
    pub rate: f32,
}

impl Spin {
    pub fn new(rate: f32) -> Self {
        Self { angle: 0.0, rate }
    }

    pub fn step(&mut self) {
        self.angle += self.rate;
    }
}

/// Invisible parent at the origin whose Y rotation carries a planet around
/// its orbit.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitPivot {
    pub body: BodyId,
    pub angle: f32,
    /// Radians per tick.
    pub angular_speed: f32,
}

impl OrbitPivot {
    pub fn new(body: BodyId, angular_speed: f32) -> Self {
        Self {
            body,
            angle: 0.0,
            angular_speed,
        }
    }

    pub fn step(&mut self) {
        self.angle += self.angular_speed;
    }
}

fn advance_clock(mut clock: ResMut<SceneClock>) {
    clock.ticks += 1;
}

fn spin_bodies(mut query: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut transform) in &mut query {
        spin.step();
        transform.rotation = Quat::from_rotation_y(spin.angle);
    }
}

fn revolve_orbits(mut query: Query<(&mut OrbitPivot, &mut Transform)>) {
    for (mut pivot, mut transform) in &mut query {
        pivot.step();
        transform.rotation = Quat::from_rotation_y(pivot.angle);
    }
}

/// Point every glow shell's view vector from the shell to the camera.
fn aim_glow_shells(
    camera_query: Query<&GlobalTransform, With<MainCamera>>,
    mut shells: Query<(&mut GlowShell, &GlobalTransform)>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };
    let eye = camera.translation();

    for (mut shell, transform) in &mut shells {
        let view_vector = eye - transform.translation();
        // Avoid touching change detection when the camera is still
        if shell.view_vector != view_vector {
            shell.view_vector = view_vector;
        }
    }
}

/// Rotation that gives a child of `parent_world` the world rotation `target`.
pub fn facing_rotation(parent_world: Quat, target: Quat) -> Quat {
    parent_world.inverse() * target
}

/// World rotation of `entity` from the current local transforms of its
/// ancestors.
///
/// Global transforms lag a frame behind the motion systems, so the chain of
/// local rotations is walked directly.
fn world_rotation(
    entity: Entity,
    transforms: &Query<&Transform, Without<BodyLabel>>,
    parents: &Query<&ChildOf>,
) -> Quat {
    let mut rotation = Quat::IDENTITY;
    let mut current = Some(entity);
    while let Some(e) = current {
        if let Ok(transform) = transforms.get(e) {
            rotation = transform.rotation * rotation;
        }
        current = parents.get(e).ok().map(ChildOf::parent);
    }
    rotation
}

/// Turn every label so it presents its face to the camera.
fn orient_labels(
    camera_query: Query<&Transform, (With<MainCamera>, Without<BodyLabel>)>,
    mut labels: Query<(&mut Transform, &ChildOf), With<BodyLabel>>,
    transforms: Query<&Transform, Without<BodyLabel>>,
    parents: Query<&ChildOf>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };

    for (mut transform, child_of) in &mut labels {
        let parent_world = world_rotation(child_of.parent(), &transforms, &parents);
        transform.rotation = facing_rotation(parent_world, camera.rotation);
    }
}
