//! Scene lifecycle.
//!
//! Mounting the scene (entering [`AppState::Galaxy`]) starts the asset
//! loads; once textures settle the bodies are built and the tick loop runs.
//! Leaving the state tears everything down: scene entities are despawned,
//! which also stops the ambient sound, and per-mount resources are removed
//! so late asset completions have nothing to update.

use bevy::prelude::*;

use crate::assets::{AssetLoadingPlugin, ResolvedTextures, SceneAssets};
use crate::audio::AmbientSoundPlugin;
use crate::camera::reset_camera;
use crate::motion::MotionPlugin;
use crate::render::{BackgroundVideo, RenderPlugin};
use crate::selection::{SelectedBody, SelectionPlugin};
use crate::types::{AppState, SceneClock, SceneEntity};

/// Plugin aggregating the scene: loading, construction, tick loop, picking
/// and teardown.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            AssetLoadingPlugin,
            RenderPlugin,
            MotionPlugin,
            SelectionPlugin,
            AmbientSoundPlugin,
        ))
        .add_systems(OnExit(AppState::Galaxy), (teardown_scene, reset_camera));
    }
}

/// Release everything the scene created.
pub fn teardown_scene(
    mut commands: Commands,
    roots: Query<Entity, With<SceneEntity>>,
    mut selected: ResMut<SelectedBody>,
    mut clock: ResMut<SceneClock>,
) {
    let mut count = 0;
    for entity in &roots {
        commands.entity(entity).despawn();
        count += 1;
    }

    commands.remove_resource::<SceneAssets>();
    commands.remove_resource::<ResolvedTextures>();
    commands.remove_resource::<BackgroundVideo>();

    selected.dismiss();
    *clock = SceneClock::default();

    info!("Scene torn down ({count} root entities)");
}
