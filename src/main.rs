//! Stellar Tour - interactive solar-system explorer
//!
//! A landing page leads into a 3D solar system: a glowing sun, eight
//! orbiting planets and a fact sheet for whichever body is clicked.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use stellar_tour::camera::CameraPlugin;
use stellar_tour::input::InputPlugin;
use stellar_tour::scene::ScenePlugin;
use stellar_tour::types::{AppState, GalaxyPhase};
use stellar_tour::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stellar Tour".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // States before the plugins that schedule systems on them
        .init_state::<AppState>()
        .add_sub_state::<GalaxyPhase>()
        .add_plugins((CameraPlugin, ScenePlugin, InputPlugin, UiPlugin))
        .run();
}
