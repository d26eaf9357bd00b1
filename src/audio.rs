//! Ambient soundtrack for the scene.
//!
//! The track loops from the moment it finishes loading until teardown. A
//! missing or undecodable file leaves the scene silent.

use bevy::prelude::*;

use crate::assets::{AssetStatus, SceneAssets};
use crate::types::{AppState, SceneEntity};

/// Plugin providing the ambient soundtrack.
pub struct AmbientSoundPlugin;

impl Plugin for AmbientSoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            start_ambient_sound.run_if(in_state(AppState::Galaxy)),
        );
    }
}

/// Marker for the looping ambient player.
#[derive(Component)]
pub struct AmbientSound;

/// Start looping playback once the track has loaded.
fn start_ambient_sound(
    mut commands: Commands,
    assets: Option<ResMut<SceneAssets>>,
    asset_server: Res<AssetServer>,
) {
    let Some(mut assets) = assets else {
        return;
    };
    if assets.ambient_started || assets.ambient_status == AssetStatus::Failed {
        return;
    }

    let status = AssetStatus::from_load_state(asset_server.get_load_state(&assets.ambient));
    match status {
        AssetStatus::Loaded => {
            commands.spawn((
                AudioPlayer::new(assets.ambient.clone()),
                PlaybackSettings::LOOP,
                AmbientSound,
                SceneEntity,
            ));
            assets.ambient_started = true;
            info!("Ambient sound started");
        }
        AssetStatus::Failed => debug!("Ambient sound unavailable; continuing without it"),
        AssetStatus::Pending => {}
    }
    assets.ambient_status = status;
}
