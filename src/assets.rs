//! Asset loading stage for the scene.
//!
//! Every texture, the ambient sound and the background video frames are
//! requested together when the scene mounts. Body construction waits until
//! each texture request has settled, either loaded or failed; failures are
//! resolved to fallback appearances later and never abort construction.

use bevy::asset::LoadState;
use bevy::audio::AudioSource;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::catalog::BodyId;
use crate::types::{AppState, GalaxyPhase};

/// Asset key of the static galaxy backdrop.
pub const GALAXY_TEXTURE: &str = "galaxy";

/// Every texture requested by the scene, in request order.
pub const TEXTURE_NAMES: [&str; 10] = [
    GALAXY_TEXTURE,
    "sun",
    "mercury",
    "venus",
    "earth",
    "mars",
    "jupiter",
    "saturn",
    "uranus",
    "neptune",
];

/// Looping ambient track.
pub const AMBIENT_SOUND_PATH: &str = "sounds/galaxy-ambient.mp3";

/// Background video, stored as a numbered frame sequence.
pub const VIDEO_FRAME_COUNT: usize = 48;

/// Playback rate of the background video.
pub const VIDEO_FPS: f32 = 24.0;

/// Path of a body or backdrop texture.
pub fn texture_path(name: &str) -> String {
    format!("textures/{name}.jpg")
}

/// Path of one background video frame.
pub fn video_frame_path(frame: usize) -> String {
    format!("galaxy/frames/frame_{frame:03}.jpg")
}

/// Settlement of a single load request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl AssetStatus {
    pub fn is_settled(self) -> bool {
        self != AssetStatus::Pending
    }

    /// Map the asset server's load state onto a settlement.
    pub fn from_load_state(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => AssetStatus::Loaded,
            Some(LoadState::Failed(_)) => AssetStatus::Failed,
            _ => AssetStatus::Pending,
        }
    }
}

/// One texture request.
#[derive(Clone, Debug)]
pub struct TextureSlot {
    pub name: &'static str,
    pub handle: Handle<Image>,
    pub status: AssetStatus,
}

/// Handles and settlement of every asset the scene requested.
///
/// Inserted when the scene mounts and removed on teardown, so loads that
/// finish after teardown find nothing to update.
#[derive(Resource, Clone, Debug)]
pub struct SceneAssets {
    pub textures: Vec<TextureSlot>,
    pub ambient: Handle<AudioSource>,
    pub ambient_status: AssetStatus,
    /// Whether the ambient player has been spawned.
    pub ambient_started: bool,
}

impl SceneAssets {
    pub fn new(textures: Vec<(&'static str, Handle<Image>)>, ambient: Handle<AudioSource>) -> Self {
        Self {
            textures: textures
                .into_iter()
                .map(|(name, handle)| TextureSlot {
                    name,
                    handle,
                    status: AssetStatus::Pending,
                })
                .collect(),
            ambient,
            ambient_status: AssetStatus::Pending,
            ambient_started: false,
        }
    }

    /// True once no texture request is still pending.
    pub fn all_textures_settled(&self) -> bool {
        self.textures.iter().all(|slot| slot.status.is_settled())
    }

    /// Textures that loaded; failed names are simply absent.
    pub fn resolve(&self) -> ResolvedTextures {
        let by_name = self
            .textures
            .iter()
            .filter(|slot| slot.status == AssetStatus::Loaded)
            .map(|slot| (slot.name, slot.handle.clone()))
            .collect();
        ResolvedTextures { by_name }
    }
}

/// Outcome of the loading stage, consumed by body construction.
#[derive(Resource, Clone, Debug, Default)]
pub struct ResolvedTextures {
    by_name: HashMap<&'static str, Handle<Image>>,
}

impl ResolvedTextures {
    /// Texture for `name`, or `None` when it failed to load.
    pub fn get(&self, name: &str) -> Option<Handle<Image>> {
        self.by_name.get(name).cloned()
    }

    pub fn for_body(&self, id: BodyId) -> Option<Handle<Image>> {
        self.get(id.texture_name())
    }

    pub fn loaded_count(&self) -> usize {
        self.by_name.len()
    }

    /// Build from explicit handles; names not given count as failed.
    pub fn from_handles(handles: impl IntoIterator<Item = (&'static str, Handle<Image>)>) -> Self {
        Self {
            by_name: handles.into_iter().collect(),
        }
    }
}

/// Plugin providing the loading stage.
pub struct AssetLoadingPlugin;

impl Plugin for AssetLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Galaxy), begin_asset_load)
            .add_systems(
                Update,
                poll_texture_loads.run_if(in_state(GalaxyPhase::Loading)),
            );
    }
}

/// Request every scene asset at once.
fn begin_asset_load(mut commands: Commands, asset_server: Res<AssetServer>) {
    let textures = TEXTURE_NAMES
        .iter()
        .map(|&name| (name, asset_server.load::<Image>(texture_path(name))))
        .collect();
    let ambient = asset_server.load::<AudioSource>(AMBIENT_SOUND_PATH);

    let frames = (0..VIDEO_FRAME_COUNT)
        .map(|i| asset_server.load::<Image>(video_frame_path(i)))
        .collect();

    commands.insert_resource(SceneAssets::new(textures, ambient));
    commands.insert_resource(crate::render::BackgroundVideo::new(frames, VIDEO_FPS));

    info!(
        "Requested {} textures, ambient sound and {} video frames",
        TEXTURE_NAMES.len(),
        VIDEO_FRAME_COUNT
    );
}

/// Track texture settlement and hand over to construction once all settle.
fn poll_texture_loads(
    mut commands: Commands,
    assets: Option<ResMut<SceneAssets>>,
    asset_server: Res<AssetServer>,
    mut next_phase: ResMut<NextState<GalaxyPhase>>,
) {
    // Torn down while loading
    let Some(mut assets) = assets else {
        return;
    };

    for slot in assets.textures.iter_mut() {
        if slot.status.is_settled() {
            continue;
        }
        slot.status = AssetStatus::from_load_state(asset_server.get_load_state(&slot.handle));
        if slot.status == AssetStatus::Failed {
            warn!("Texture '{}' failed to load, using fallback", slot.name);
        }
    }

    if !assets.all_textures_settled() {
        return;
    }

    let resolved = assets.resolve();
    info!(
        "Textures settled: {}/{} loaded",
        resolved.loaded_count(),
        assets.textures.len()
    );
    commands.insert_resource(resolved);
    next_phase.set(GalaxyPhase::Running);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> SceneAssets {
        SceneAssets::new(
            TEXTURE_NAMES.iter().map(|&n| (n, Handle::default())).collect(),
            Handle::default(),
        )
    }

    fn settle(assets: &mut SceneAssets, name: &str, status: AssetStatus) {
        let slot = assets
            .textures
            .iter_mut()
            .find(|slot| slot.name == name)
            .expect("requested texture");
        slot.status = status;
    }

    #[test]
    fn test_fresh_requests_are_pending() {
        let assets = fixture();
        assert_eq!(assets.textures.len(), 10);
        assert!(!assets.all_textures_settled());
    }

    #[test]
    fn test_settles_only_when_every_texture_settles() {
        let mut assets = fixture();
        for name in &TEXTURE_NAMES[..9] {
            settle(&mut assets, name, AssetStatus::Loaded);
        }
        assert!(!assets.all_textures_settled());

        settle(&mut assets, "neptune", AssetStatus::Failed);
        assert!(assets.all_textures_settled());
    }

    #[test]
    fn test_failed_texture_is_absent_from_resolution() {
        let mut assets = fixture();
        for name in TEXTURE_NAMES {
            settle(&mut assets, name, AssetStatus::Loaded);
        }
        settle(&mut assets, "mars", AssetStatus::Failed);

        let resolved = assets.resolve();
        assert_eq!(resolved.loaded_count(), 9);
        assert!(resolved.for_body(BodyId::Mars).is_none());
        assert!(resolved.for_body(BodyId::Earth).is_some());
        assert!(resolved.get(GALAXY_TEXTURE).is_some());
    }

    #[test]
    fn test_load_state_mapping() {
        assert_eq!(AssetStatus::from_load_state(None), AssetStatus::Pending);
        assert_eq!(
            AssetStatus::from_load_state(Some(LoadState::Loading)),
            AssetStatus::Pending
        );
        assert_eq!(
            AssetStatus::from_load_state(Some(LoadState::Loaded)),
            AssetStatus::Loaded
        );
    }

    #[test]
    fn test_asset_paths() {
        assert_eq!(texture_path("earth"), "textures/earth.jpg");
        assert_eq!(video_frame_path(7), "galaxy/frames/frame_007.jpg");
    }
}
