//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetMetaCheck;
use bevy::audio::AudioSource;
use bevy::camera::CameraProjection;
use bevy::image::{CompressedImageFormats, ImageLoader, ImagePlugin};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use stellar_tour::assets::{AssetLoadingPlugin, ResolvedTextures, TEXTURE_NAMES};
use stellar_tour::audio::AmbientSoundPlugin;
use stellar_tour::camera::{CAMERA_FAR, CAMERA_FOV, CAMERA_NEAR, MainCamera};
use stellar_tour::motion::MotionPlugin;
use stellar_tour::render::{GlowMaterial, poll_video_frames, spawn_solar_system};
use stellar_tour::scene::teardown_scene;
use stellar_tour::selection::{SceneClick, SelectionPlugin};
use stellar_tour::types::{AppState, GalaxyPhase, SceneClock};

/// Eye position of the test camera: above and in front of the star.
pub const TEST_EYE: Vec3 = Vec3::new(0.0, 300.0, 300.0);

/// Asset root holding every texture except Mars; no sounds or video frames.
pub const FIXTURE_ASSETS: &str = "tests/fixtures/assets";

/// Headless app with the scene's construction, tick loop, selection and
/// teardown, but no window, renderer or asset server.
pub fn scene_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin))
        .insert_resource(Assets::<Mesh>::default())
        .insert_resource(Assets::<StandardMaterial>::default())
        .insert_resource(Assets::<GlowMaterial>::default());
    add_scene_lifecycle(&mut app);
    app.update();
    app
}

/// Headless app that also runs the real loading stage against
/// [`FIXTURE_ASSETS`].
pub fn loading_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin {
            file_path: FIXTURE_ASSETS.to_string(),
            meta_check: AssetMetaCheck::Never,
            ..default()
        },
        ImagePlugin::default(),
    ))
    // The renderer normally registers the image loader
    .register_asset_loader(ImageLoader::new(CompressedImageFormats::NONE))
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>()
    .init_asset::<GlowMaterial>()
    .init_asset::<AudioSource>();
    add_scene_lifecycle(&mut app);
    app.add_plugins((AssetLoadingPlugin, AmbientSoundPlugin))
        .add_systems(Update, poll_video_frames.run_if(in_state(AppState::Galaxy)));
    app.update();
    app
}

/// Update until `done` holds, sleeping between frames so background loads
/// can finish. Returns whether `done` was reached.
pub fn update_until(app: &mut App, mut done: impl FnMut(&mut App) -> bool) -> bool {
    for _ in 0..2000 {
        app.update();
        if done(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

fn add_scene_lifecycle(app: &mut App) {
    app.init_state::<AppState>()
        .add_sub_state::<GalaxyPhase>()
        .add_plugins((MotionPlugin, SelectionPlugin))
        .add_systems(OnEnter(GalaxyPhase::Running), spawn_solar_system)
        .add_systems(OnExit(AppState::Galaxy), teardown_scene);

    app.world_mut().spawn((
        Transform::from_translation(TEST_EYE).looking_at(Vec3::ZERO, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV,
            aspect_ratio: 16.0 / 9.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        MainCamera,
    ));
}

/// Every texture resolved except `missing`.
pub fn textures_without(missing: &[&str]) -> ResolvedTextures {
    ResolvedTextures::from_handles(
        TEXTURE_NAMES
            .iter()
            .filter(|name| !missing.contains(name))
            .map(|&name| (name, Handle::default())),
    )
}

/// Mount the scene and stand in for the loading stage with `textures`.
pub fn enter_scene(app: &mut App, textures: ResolvedTextures) {
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Galaxy);
    app.update();

    app.insert_resource(textures);
    app.world_mut()
        .resource_mut::<NextState<GalaxyPhase>>()
        .set(GalaxyPhase::Running);
    app.update();
}

/// Mount the scene and let the loading stage run on its own.
pub fn request_scene(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Galaxy);
    app.update();
}

pub fn phase(app: &App) -> Option<GalaxyPhase> {
    app.world()
        .get_resource::<State<GalaxyPhase>>()
        .map(|state| *state.get())
}

pub fn leave_scene(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Landing);
    app.update();
}

pub fn set_paused(app: &mut App, paused: bool) {
    app.world_mut().resource_mut::<SceneClock>().paused = paused;
}

/// Count entities matching a query filter.
pub fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, F>()
        .iter(app.world())
        .count()
}

/// Normalized device coordinates of a world point seen by the test camera.
pub fn world_to_ndc(app: &mut App, point: Vec3) -> Vec2 {
    let (transform, projection) = app
        .world_mut()
        .query_filtered::<(&GlobalTransform, &Projection), With<MainCamera>>()
        .single(app.world())
        .expect("test camera");
    let view_from_world = Mat4::from(transform.affine()).inverse();
    (projection.get_clip_from_view() * view_from_world)
        .project_point3(point)
        .truncate()
}

/// Click at `ndc` and let selection process it.
pub fn click(app: &mut App, ndc: Vec2) {
    app.world_mut().write_message(SceneClick { ndc });
    app.update();
}
